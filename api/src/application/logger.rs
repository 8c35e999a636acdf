use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {:?} ({}), using \"info\"", args.filter, e);
        EnvFilter::new("info")
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if args.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
