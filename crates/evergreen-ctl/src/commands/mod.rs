//! Command handlers for `evergreen-ctl`.
//!
//! Each module handles one subcommand and talks to `evergreen_matrix` directly.

pub(crate) mod generate;
pub(crate) mod init;
pub(crate) mod list;
pub(crate) mod summary;
pub(crate) mod verify;

pub(crate) use generate::handle_generate_command;
pub(crate) use init::handle_init_command;
pub(crate) use list::handle_list_command;
pub(crate) use summary::handle_summary_command;
pub(crate) use verify::handle_verify_command;
