use freespace_report::platform::{HostDiskSpace, HostRemoteShare};
use freespace_report::{bind_arguments, logger, run_report, ReportWriter};
use std::env;
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logger::init_logger();
    logger::log_info("FreeSpaceReport starting");

    let args = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    let bindings = bind_arguments(args);
    logger::log_info(&format!(
        "Bound {} path(s) to {} credential pair(s)",
        bindings.paths.len(),
        bindings.registry.len()
    ));

    let share = HostRemoteShare::new();
    let disk = HostDiskSpace::new();
    let mut writer = ReportWriter::new(io::stdout().lock());

    match run_report(&bindings, &share, &disk, &mut writer).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
