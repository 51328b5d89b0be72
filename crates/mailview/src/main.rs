//! `MailView` - desktop mail viewer.
//!
//! A folder sidebar, a filtered message list and a detail pane, driven by the
//! view controller from `mailview-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use iced::widget::{column, row};
use iced::{Element, Length, Task};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailview_core::{MessageStore, ViewController};

use message::Message;
use model::{AppSettings, MessageList, SeedSource};
use style::palette::{self, ThemeMode};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailview=debug,mailview_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MailView");

    iced::application(MailView::new, MailView::update, MailView::view)
        .title("MailView")
        .run()
}

/// Main application state.
struct MailView {
    /// Filter state, message store and the rendered list.
    controller: ViewController<MessageList>,
    /// Where the messages came from.
    source: SeedSource,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
}

impl MailView {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let source = SeedSource::resolve();
        info!(source = %source.label(), "Loading messages");

        let app = Self {
            controller: ViewController::new(MessageStore::default(), MessageList::default()),
            source: source.clone(),
            theme_mode: ThemeMode::default(),
        };
        app.apply_theme();

        let settings_task = Task::perform(AppSettings::load(), Message::SettingsLoaded);
        let seed_task = Task::perform(source.load(), Message::SeedLoaded);
        (app, Task::batch([settings_task, seed_task]))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        palette::set_theme(self.theme_mode);
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectFolder(folder) => {
                self.controller.set_folder(folder);
            }
            Message::SearchChanged(search) => {
                self.controller.set_search_term(search);
            }
            Message::ToggleUnreadOnly => {
                let unread_only = !self.controller.filter().unread_only;
                self.controller.set_unread_only(unread_only);
            }
            Message::SelectMessage(id) => {
                self.controller.select_message(id);
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.apply_theme();
                let settings = AppSettings {
                    theme_mode: self.theme_mode,
                };
                return Task::perform(settings.save(), Message::SettingsSaved);
            }
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    self.theme_mode = settings.theme_mode;
                    self.apply_theme();
                }
                Err(e) => warn!("Failed to load settings: {e}"),
            },
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {e}");
                }
            }
            Message::SeedLoaded(result) => {
                let (store, fell_back) = model::store_or_sample(result);
                if fell_back {
                    self.source = SeedSource::Sample;
                }
                info!(count = store.len(), "Messages loaded");
                let filter = self.controller.filter().clone();
                self.controller = ViewController::with_filter(store, filter, MessageList::default());
            }
        }
        Task::none()
    }

    /// Three-pane layout: header, then sidebar, list and detail.
    fn view(&self) -> Element<'_, Message> {
        let filter = self.controller.filter();
        let header = view::view_header(
            &filter.search,
            filter.unread_only,
            self.theme_mode,
            &self.source.label(),
        );

        let selected = self.controller.selected();
        let detail = selected.and_then(|id| self.controller.store().get(id));

        let main_content = row![
            view::view_sidebar(self.controller.store(), filter.folder),
            view::view_message_list(self.controller.sink().rows(), selected),
            view::view_detail(detail),
        ];

        column![header, main_content.height(Length::Fill)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
