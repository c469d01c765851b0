//! User input prompts and interactions

use anyhow::{Context, Result};

use crate::i18n;

/// Ask the user to confirm the destructive clear operation
pub fn confirm_clear() -> Result<bool> {
    cliclack::confirm(i18n::t("clear_confirm"))
        .initial_value(false)
        .interact()
        .context("Confirmation prompt failed")
}
