//! Slash-command bot on top of the event store.

pub mod args;
pub mod command;
pub mod format;
pub mod notifier;
pub mod update;

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Privilege, PrivilegeTable};
use crate::store::{EventStore, StoreError};

use args::{ArgsError, CREATE_USAGE, DELETE_USAGE, EDIT_USAGE};
pub use command::{parse_invocation, Command, Invocation};
pub use notifier::{Notifier, NotifyError, OutboundMessage, TelegramNotifier};
pub use update::Update;

/// How far ahead `/upcoming` looks.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Text to send back, and whether it should be rendered as Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub rich_text: bool,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("bad arguments for {command}: {source}")]
    Arguments {
        command: Command,
        #[source]
        source: ArgsError,
    },

    #[error("event time is in the past")]
    PastDate,

    #[error("chat is not allowed to run {0}")]
    Unauthorized(Command),

    #[error("unknown command /{0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommandError {
    pub fn reply_text(&self) -> String {
        match self {
            CommandError::Arguments { command, source } => {
                let usage = match command {
                    Command::Edit => EDIT_USAGE,
                    Command::Delete => DELETE_USAGE,
                    _ => CREATE_USAGE,
                };
                match source {
                    ArgsError::UsageRequested => format::usage_text(usage, None),
                    other => format::usage_text(usage, Some(&other.to_string())),
                }
            }
            CommandError::PastDate => format::PAST_DATE_TEXT.to_string(),
            CommandError::Unauthorized(_) => format::UNAUTHORIZED_TEXT.to_string(),
            CommandError::UnknownCommand(_) => format::UNKNOWN_COMMAND_TEXT.to_string(),
            CommandError::Store(StoreError::DuplicateKey { name, date }) => {
                format::duplicate_text(name, *date)
            }
            CommandError::Store(StoreError::NotFound { name, date }) => {
                format::not_found_text(name, *date)
            }
            CommandError::Store(StoreError::Database(_)) => format::STORE_FAILURE_TEXT.to_string(),
        }
    }
}

pub struct CommandRouter {
    store: Arc<dyn EventStore>,
    privileges: PrivilegeTable,
    timezone: Tz,
}

impl CommandRouter {
    pub fn new(store: Arc<dyn EventStore>, privileges: PrivilegeTable, timezone: Tz) -> Self {
        Self {
            store,
            privileges,
            timezone,
        }
    }

    /// Wall-clock time in the bot's time zone.
    pub fn local_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }

    pub async fn handle(&self, chat_id: i64, text: &str) -> Option<Reply> {
        self.handle_at(chat_id, text, self.local_now()).await
    }

    /// Answers one message as of `now`. Non-command text gets no reply.
    pub async fn handle_at(&self, chat_id: i64, text: &str, now: NaiveDateTime) -> Option<Reply> {
        let invocation = parse_invocation(text)?;
        let privilege = self.privileges.classify(chat_id);
        let command = Command::from_token(&invocation.token);

        let result = match command {
            Some(command) => self.run(command, invocation.args, privilege, now).await,
            None => Err(CommandError::UnknownCommand(invocation.token.clone())),
        };

        let text = match result {
            Ok(text) => {
                info!(chat_id, %privilege, token = %invocation.token, "Command answered");
                text
            }
            Err(err) => {
                match &err {
                    CommandError::Store(StoreError::Database(e)) => {
                        warn!(
                            chat_id,
                            %privilege,
                            token = %invocation.token,
                            error = ?e,
                            "Store failure"
                        );
                    }
                    _ => {
                        info!(
                            chat_id,
                            %privilege,
                            token = %invocation.token,
                            error = %err,
                            "Command rejected"
                        );
                    }
                }
                err.reply_text()
            }
        };

        Some(Reply {
            text,
            rich_text: command.map(Command::rich_text).unwrap_or(true),
        })
    }

    async fn run(
        &self,
        command: Command,
        tail: &str,
        privilege: Privilege,
        now: NaiveDateTime,
    ) -> Result<String, CommandError> {
        if command.is_mutation() && privilege < Privilege::Admin {
            return Err(CommandError::Unauthorized(command));
        }

        let bad_args = |source| CommandError::Arguments { command, source };

        match command {
            Command::Start => Ok(format::START_TEXT.to_string()),
            Command::Help => Ok(format::help_text()),
            Command::About => Ok(format::ABOUT_TEXT.to_string()),
            Command::Upcoming => {
                let horizon = now.date() + Duration::days(UPCOMING_WINDOW_DAYS);
                let events: Vec<_> = self
                    .store
                    .query_from(now.date(), now.time(), privilege)
                    .await?
                    .into_iter()
                    .filter(|event| event.date <= horizon)
                    .collect();
                Ok(format::listing_text("Coming up this week", &events))
            }
            Command::Schedule => {
                let events = self
                    .store
                    .query_from(now.date(), now.time(), privilege)
                    .await?;
                Ok(format::listing_text("Schedule", &events))
            }
            Command::Create => {
                let event = args::parse_create(tail).map_err(bad_args)?;
                if args::is_past(event.date, event.time, now) {
                    return Err(CommandError::PastDate);
                }
                self.store.create(&event).await?;
                info!(name = %event.name, date = %event.date, "Event created from chat");
                Ok(format::created_text(&event))
            }
            Command::Edit => {
                let edit = args::parse_edit(tail).map_err(bad_args)?;
                self.store
                    .update(&edit.name, edit.date, &edit.details)
                    .await?;
                info!(name = %edit.name, date = %edit.date, "Event edited from chat");
                Ok(format::edited_text(&edit.name, edit.date))
            }
            Command::Delete => {
                let delete = args::parse_delete(tail).map_err(bad_args)?;
                self.store.delete(&delete.name, delete.date).await?;
                info!(name = %delete.name, date = %delete.date, "Event deleted from chat");
                Ok(format::deleted_text(&delete.name, delete.date))
            }
        }
    }
}
