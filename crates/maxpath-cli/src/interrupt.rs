//! Ctrl-C handling

use std::process::ExitCode;

use maxpath_core::CancelToken;
use signal_hook::consts::SIGINT;

/// Exit status used for interrupted runs
pub const EXIT_INTERRUPTED: u8 = 130;

/// How a pass over the start nodes ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Finished,
    Interrupted,
}

impl RunStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Finished => ExitCode::SUCCESS,
            Self::Interrupted => ExitCode::from(EXIT_INTERRUPTED),
        }
    }
}

/// Route SIGINT into a cancellation token
///
/// The first interrupt only sets the token so the running search can report
/// its partial count. A second interrupt terminates the process immediately.
pub fn install() -> anyhow::Result<CancelToken> {
    let token = CancelToken::new();
    let flag = token.flag();

    signal_hook::flag::register_conditional_shutdown(
        SIGINT,
        i32::from(EXIT_INTERRUPTED),
        flag.clone(),
    )?;
    signal_hook::flag::register(SIGINT, flag)?;

    tracing::debug!("Interrupt handler installed");
    Ok(token)
}
