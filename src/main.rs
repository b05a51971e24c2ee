// SPDX-License-Identifier: MPL-2.0
use iced_indicator::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang");
        None
    });
    let safe_area = args
        .opt_value_from_str::<_, f32>("--safe-area")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --safe-area");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(Flags { lang, safe_area })
}
