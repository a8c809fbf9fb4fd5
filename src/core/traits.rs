//! Presentation seam for the form controller
//!
//! The controller never draws anything itself. Every visible effect of a
//! submission goes through a `Presenter`, which lets the same controller
//! drive the terminal and an in-memory recorder in tests.

use async_trait::async_trait;

use crate::core::notice::Notice;
use crate::core::view::ResultView;
use crate::utils::error::AppResult;

#[async_trait]
pub trait Presenter: Send + Sync {
    /// One-time setup, run while the application starts.
    fn install(&mut self) -> AppResult<()>;

    /// Show the busy indicator while a request is outstanding.
    fn show_busy(&self);

    /// Clear the busy indicator. Safe to call when it is not shown.
    fn hide_busy(&self);

    /// Draw a successful result into the results region.
    async fn show_results(&self, view: &ResultView);

    /// Bring the results region into view.
    fn scroll_to_results(&self);

    /// Show a transient, self-dismissing notice.
    fn show_notice(&self, notice: Notice);
}
