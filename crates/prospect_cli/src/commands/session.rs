//! `prospect session` subcommands.

use anyhow::Result;
use prospect_core::SessionStore;

use crate::cli::SessionAction;
use crate::output;

pub fn handle(action: SessionAction) -> Result<()> {
    let store = SessionStore::default_location()?;
    match action {
        SessionAction::Show => {
            match store.load() {
                Some(session) => output::kv("session", session.as_str()),
                None => output::dim("no stored session"),
            }
            Ok(())
        }
        SessionAction::Reset => {
            store.clear()?;
            output::dim("stored session cleared; the next chat starts fresh");
            Ok(())
        }
    }
}
