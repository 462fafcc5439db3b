// SPDX-License-Identifier: MPL-2.0
use hakka_showcase::app::{self, paths, Flags};
use hakka_showcase::logging;

const HELP: &str = "\
hakka_showcase - Hakka Daikon design system catalog

USAGE:
  hakka_showcase [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --config-dir <DIR>       Directory holding settings.toml
  --data-dir <DIR>         Directory holding the logs/ folder
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_default(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_default(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or_default(),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    let _logging = logging::init(paths::get_log_dir());

    app::run(flags)
}
