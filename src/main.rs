use round_clear::config::ScreenConfig;
use round_clear::cooldown::{SystemTimers, TimerFactory};
use round_clear::frame::SdlFrameContext;
use round_clear::gui::SdlOutcomeRenderer;
use round_clear::input::{KeyBindings, KeyState, SdlKeyboard};
use round_clear::scores::JsonScoreArchive;
use round_clear::{MenuChoice, MenuSettings, OutcomeMenu, ScreenServices, SessionSnapshot};

const CONFIG_PATH: &str = "assets/config/clear_screen.json";

/// Largest integer window scale that fits the monitor
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, config: &ScreenConfig) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let scale = (usable_w / config.width.max(1) as i32)
                .min(usable_h / config.height.max(1) as i32);
            scale.clamp(1, 3) as u32
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ScreenConfig::load_or_default(CONFIG_PATH).map_err(|e| e.to_string())?;

    // Session file from the command line, otherwise a demo round
    let snapshot = match std::env::args().nth(1) {
        Some(path) => SessionSnapshot::load_from_file(&path)
            .map_err(|e| format!("Failed to load session {}: {}", path, e))?,
        None => {
            log::info!("No session file given, showing a demo round");
            SessionSnapshot::single_player(3, 1200, 2)
        }
    };

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_scale = calculate_window_scale(&video_subsystem, &config);
    let window = video_subsystem
        .window(
            "Level Clear",
            config.width * window_scale,
            config.height * window_scale,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(config.width, config.height)
        .map_err(|e| e.to_string())?;

    let timers = SystemTimers;
    let keys = KeyState::new();
    let keyboard = SdlKeyboard::new(keys.clone(), KeyBindings::from_config(&config.bindings));
    let mut frame = SdlFrameContext::new(
        sdl_context.event_pump()?,
        keys,
        config.frame_duration(),
        timers.cooldown(config.input_delay()),
    );
    let mut renderer = SdlOutcomeRenderer::new(canvas, config.width, config.height);

    let scores_dir = config.scores_dir();
    log::info!("Reading high scores from {}", scores_dir.display());
    let archive = JsonScoreArchive::new(&scores_dir);

    let settings = MenuSettings {
        selection_interval: config.selection_interval(),
    };
    let services = ScreenServices {
        input: &keyboard,
        renderer: &mut renderer,
        frame: &mut frame,
        timers: &timers,
    };
    let mut menu = OutcomeMenu::new(snapshot, &archive, services, settings);

    match menu.run() {
        Some(MenuChoice::Replay) => log::info!("Next screen: new round"),
        Some(MenuChoice::ToMainMenu) => log::info!("Next screen: main menu"),
        None => log::info!("Closed before a choice was made"),
    }

    Ok(())
}
