// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use text_stats_engine::config::{Config, ConfigBuilder};
use text_stats_engine::options as engine_options;

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let format: engine_options::OutputFormat = args.format.into();
        let live_output: engine_options::LiveOutput = args.live_output.into();

        Self {
            words_per_minute: args.wpm,
            char_limit: args.limit,
            warn_on_limit: !args.quiet_limit,
            format,
            live: args.live,
            live_output,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self::from(&args)
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl
);
map_enum!(options::LiveOutput, engine_options::LiveOutput, Full, Jsonl);
