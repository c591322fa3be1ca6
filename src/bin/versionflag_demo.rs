use versionflag::{init, print_version_and_exit, Reporter, VersionOutcome};

fn main() {
    init();

    if std::env::var_os("VERSIONFLAG_DEMO_DIRECT").is_some() {
        print_version_and_exit();
    } else {
        // The entry point owns termination; the reporter only decides.
        let reporter = Reporter::from_env();
        match reporter.check(&mut std::io::stdout()) {
            Ok(VersionOutcome::Exit { code }) => std::process::exit(code),
            Ok(VersionOutcome::Continue) => {}
            Err(err) => {
                tracing::warn!(error = %err, "failed to write version information");
                std::process::exit(0);
            }
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    println!("running with {} argument(s): {}", args.len(), args.join(" "));
}
