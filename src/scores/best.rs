use super::archive::ScoreArchive;
use crate::session::GameMode;

/// Highest recorded score for `mode`
///
/// An unreadable, corrupt or empty archive yields `None` and a warning. This never
/// fails; a missing best score only blanks one line of the screen.
pub fn resolve_best_score(archive: &dyn ScoreArchive, mode: GameMode) -> Option<u32> {
    match archive.load_historical_scores(mode) {
        Ok(records) => {
            let best = records.iter().map(|record| record.score).max();
            if best.is_none() {
                log::warn!("Couldn't load high score: no {} scores recorded", mode);
            }
            best
        }
        Err(e) => {
            log::warn!("Couldn't load high score: {}", e);
            None
        }
    }
}
