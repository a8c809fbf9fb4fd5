use async_trait::async_trait;
use chrono::Utc;
use crossterm::{
    cursor, execute,
    style::Print,
    terminal::{self, ClearType},
    tty::IsTty,
};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::GeneralConfig;
use crate::core::notice::{Notice, NoticeBoard};
use crate::core::traits::Presenter;
use crate::core::view::ResultView;
use crate::utils::error::{AppError, AppResult};
use crate::utils::html::render_html;
use crate::utils::output::OutputStyle;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_TICK: Duration = Duration::from_millis(80);
const BUSY_LABEL: &str = "Calculating your BMI...";

/// Draws results on stdout and the busy spinner and notices on stderr.
pub struct TerminalPresenter {
    format: OutputFormat,
    color: bool,
    reveal_delay: Duration,
    animate: bool,
    spinner: Mutex<Option<Spinner<io::Stderr>>>,
    notices: Mutex<NoticeBoard>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn clear_line(out: &mut impl Write) -> io::Result<()> {
    execute!(out, cursor::MoveToColumn(0), terminal::Clear(ClearType::CurrentLine))
}

struct SpinnerLine<W> {
    out: W,
    stopped: bool,
}

/// A busy line redrawn by a background task. Frames are written under the
/// same lock that `stop` takes, so no frame lands after the line is cleared.
struct Spinner<W> {
    line: Arc<Mutex<SpinnerLine<W>>>,
    handle: JoinHandle<()>,
}

impl<W: Write + Send + 'static> Spinner<W> {
    fn start(runtime: &Handle, out: W) -> Self {
        let line = Arc::new(Mutex::new(SpinnerLine { out, stopped: false }));
        let shared = Arc::clone(&line);

        let handle = runtime.spawn(async move {
            for frame in SPINNER_FRAMES.iter().cycle() {
                {
                    let mut guard = locked(&shared);
                    let SpinnerLine { out, stopped } = &mut *guard;
                    if *stopped {
                        break;
                    }
                    let text = format!("{} {}", frame, BUSY_LABEL);
                    if clear_line(out).is_err() || execute!(out, Print(OutputStyle::info(&text))).is_err() {
                        break;
                    }
                }
                tokio::time::sleep(SPINNER_TICK).await;
            }
        });

        Self { line, handle }
    }

    fn stop(self) {
        let mut guard = locked(&self.line);
        guard.stopped = true;
        let _ = clear_line(&mut guard.out);
        drop(guard);
        self.handle.abort();
    }
}

impl TerminalPresenter {
    pub fn new(general: &GeneralConfig, format: OutputFormat) -> Self {
        Self {
            format,
            color: general.color,
            reveal_delay: general.reveal_delay(),
            animate: false,
            spinner: Mutex::new(None),
            notices: Mutex::new(NoticeBoard::new()),
        }
    }

    /// Notices still within their ttl, joined for a status line. Expired
    /// ones are dropped first, so a notice stops showing once its time is up.
    pub fn notice_status(&self) -> Option<String> {
        let mut board = locked(&self.notices);
        let dismissed = board.dismiss_expired(Utc::now());
        if !dismissed.is_empty() {
            debug!(count = dismissed.len(), "notices dismissed");
        }
        let active = board.active();
        if active.is_empty() {
            return None;
        }
        Some(
            active
                .iter()
                .map(|notice| notice.message.as_str())
                .collect::<Vec<_>>()
                .join(" | "),
        )
    }

    /// Draw the active notices above the next prompt.
    pub fn redraw_notices(&self) {
        if let Some(status) = self.notice_status() {
            eprintln!("❌ {}", OutputStyle::error(&status));
        }
    }

    fn render(&self, view: &ResultView) -> AppResult<Vec<String>> {
        Ok(match self.format {
            OutputFormat::Text => OutputStyle::result_lines(view),
            OutputFormat::Json => vec![
                serde_json::to_string_pretty(view)
                    .map_err(|e| AppError::System(format!("Failed to serialize result: {}", e)))?,
            ],
            OutputFormat::Html => vec![render_html(view)],
        })
    }
}

#[async_trait]
impl Presenter for TerminalPresenter {
    fn install(&mut self) -> AppResult<()> {
        if !self.color {
            colored::control::set_override(false);
        }
        self.animate = io::stderr().is_tty();
        debug!(animate = self.animate, color = self.color, "terminal presenter installed");
        Ok(())
    }

    fn show_busy(&self) {
        if !self.animate {
            return;
        }

        let Ok(runtime) = Handle::try_current() else {
            eprintln!("{}", OutputStyle::muted(BUSY_LABEL));
            return;
        };

        let spinner = Spinner::start(&runtime, io::stderr());
        if let Some(previous) = locked(&self.spinner).replace(spinner) {
            previous.stop();
        }
    }

    fn hide_busy(&self) {
        if let Some(spinner) = locked(&self.spinner).take() {
            spinner.stop();
        }
    }

    async fn show_results(&self, view: &ResultView) {
        let lines = match self.render(view) {
            Ok(lines) => lines,
            Err(e) => {
                crate::utils::error::report_error(&e);
                return;
            }
        };

        let reveal = self.animate
            && matches!(self.format, OutputFormat::Text)
            && !self.reveal_delay.is_zero();

        let mut stdout = io::stdout();
        for line in lines {
            let _ = writeln!(stdout, "{}", line);
            if reveal {
                let _ = stdout.flush();
                tokio::time::sleep(self.reveal_delay).await;
            }
        }
    }

    fn scroll_to_results(&self) {
        let _ = io::stdout().flush();
    }

    fn show_notice(&self, notice: Notice) {
        eprintln!("❌ {}", OutputStyle::error(&notice.message));
        let mut board = locked(&self.notices);
        board.dismiss_expired(Utc::now());
        board.push(notice);
    }
}
