// SPDX-License-Identifier: MPL-2.0
//! iced rendering of the snackbar.
//!
//! Hosts render [`Toast::view_overlay`] above their content, map the
//! returned [`Message`](crate::manager::Message)s into
//! [`Manager::handle_message`](crate::manager::Manager::handle_message) and
//! merge [`subscription`] into their own subscriptions.
//!
//! Snack heights are predicted from their labels at the container width.
//! The subscription forwards window resizes as
//! [`Message::SurfaceResized`](crate::manager::Message::SurfaceResized);
//! hosts that know the window width before the first resize should call
//! [`Manager::set_surface_width`](crate::manager::Manager::set_surface_width)
//! once at startup.
//!
//! ```ignore
//! fn view(&self) -> Element<'_, AppMessage> {
//!     Stack::new()
//!         .push(self.content())
//!         .push(Toast::view_overlay(&self.snackbar).map(AppMessage::Snackbar))
//!         .into()
//! }
//!
//! fn subscription(&self) -> Subscription<AppMessage> {
//!     iced_snackbar::ui::subscription(&self.snackbar).map(AppMessage::Snackbar)
//! }
//! ```

mod subscription;
mod toast;

pub use subscription::subscription;
pub use toast::Toast;
