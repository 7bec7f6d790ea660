mod app;
mod cli;
mod config;
mod core;
mod logging;
mod models;
mod system;
mod ui;
mod utils;

use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use core::actions::panel_command_items;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use models::OpenPanel;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use ui::components::{CommandBar, Dialog, FileList, SidePanel, StatusBar, TitleBar, WarningScreen};
use ui::LayoutMode;

/// 이벤트 대기 시간 (토스트 만료 확인 주기)
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::default_path);
    let config = Config::load_or_default(config_path.as_deref());

    match logging::init(&config.log_level) {
        Ok(path) => tracing::info!(log = %path.display(), "filesift starting"),
        Err(e) => eprintln!("warning: logging disabled: {e}"),
    }

    if let Some(Command::Routine(command)) = cli.command {
        return cli::run_routine_command(command, &config, &mut io::stdout());
    }

    let start_dir = cli.dir.clone().or_else(|| config.start_dir.clone());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_tui(config, config_path, start_dir))
}

async fn run_tui(
    config: Config,
    config_path: Option<PathBuf>,
    start_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, config_path);
    if let Some(dir) = start_dir {
        app.open_start_dir(dir).await;
    }

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "terminal loop failed");
    }
    tracing::info!("filesift exiting");
    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        // 선택기가 화면을 덮어쓴 뒤에는 전체 다시 그리기
        if app.shell.take_redraw() {
            terminal.clear()?;
        }

        terminal.draw(|f| {
            let size = f.area();
            let request = app.layout_request();
            app.layout.update(size, request);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning =
                        WarningScreen::new(width, height).theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Minimized => {
                    let title_bar = TitleBar::new()
                        .path(app.browser.current_path())
                        .minimized(true)
                        .theme(app.theme_manager.current());
                    f.render_widget(title_bar, app.layout.areas().title_bar);
                }
                LayoutMode::Normal | LayoutMode::Maximized => render_main_ui(f, app),
            }
        })?;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();
    let session = app.browser.session();
    let panel = app.browser.open_panel();
    let file_count = app.browser.files().len();
    let selected_count = app.browser.selected_count();
    let filtered = session.listing_filtered;

    if app.layout.mode() == LayoutMode::Normal {
        let title_bar = TitleBar::new()
            .path(app.browser.current_path())
            .theme(theme);
        f.render_widget(title_bar, areas.title_bar);
    }

    if panel.is_open() {
        let side_panel = SidePanel::new(panel)
            .current_path(app.browser.current_path())
            .form(&app.filter_form)
            .counts(file_count, selected_count)
            .filters_active(filtered)
            .theme(theme);
        f.render_widget(side_panel, areas.side_panel);
    }

    let groups = app.browser.view();
    let title = app
        .browser
        .current_path()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "Files".to_string());
    let file_list = FileList::new(&groups)
        .title(&title)
        .cursor(app.cursor)
        .scroll_offset(app.scroll_offset)
        .has_folder(app.browser.current_path().is_some())
        .focused(panel != OpenPanel::Filters)
        .theme(theme);
    f.render_widget(file_list, areas.file_list);

    let mode = if app.layout.mode() == LayoutMode::Maximized {
        "MAX"
    } else {
        "NORMAL"
    };
    let status_bar = StatusBar::new()
        .file_count(file_count)
        .selected_count(selected_count)
        .filtered(filtered)
        .message(app.toast())
        .mode(mode)
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    if app.layout.mode() == LayoutMode::Normal {
        let command_bar = CommandBar::new(panel_command_items(panel)).theme(theme);
        f.render_widget(command_bar, areas.command_bar);
    }

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
