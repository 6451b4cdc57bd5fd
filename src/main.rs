use std::ffi::OsString;
use std::path::Path;

use folio::app::App;
use folio::content::Portfolio;
use folio::error::{AppError, AppResult};

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let content_path = parse_cli_path(std::env::args_os())?;

    let portfolio = Portfolio::load_from_path(&content_path)?;
    let source_name = display_name(Path::new(&content_path));
    let mut app = App::new(portfolio, source_name)?;

    app.run().await
}

fn parse_cli_path<I>(mut args: I) -> AppResult<OsString>
where
    I: Iterator<Item = OsString>,
{
    let _program = args.next();
    let Some(path) = args.next() else {
        return Err(AppError::invalid_argument("usage: folio <portfolio.toml>"));
    };

    if args.next().is_some() {
        return Err(AppError::invalid_argument(
            "usage: folio <portfolio.toml> (exactly one path argument is required)",
        ));
    }

    Ok(path)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::Path;

    use super::{display_name, parse_cli_path};

    #[test]
    fn parse_cli_path_accepts_single_content_arg() {
        let args = vec![OsString::from("folio"), OsString::from("portfolio.toml")];

        let path = parse_cli_path(args.into_iter()).expect("single arg should parse");
        assert_eq!(path, OsString::from("portfolio.toml"));
    }

    #[test]
    fn parse_cli_path_rejects_missing_or_extra_args() {
        let missing = vec![OsString::from("folio")];
        assert!(parse_cli_path(missing.into_iter()).is_err());

        let extra = vec![
            OsString::from("folio"),
            OsString::from("a.toml"),
            OsString::from("b.toml"),
        ];
        assert!(parse_cli_path(extra.into_iter()).is_err());
    }

    #[test]
    fn display_name_prefers_the_file_name() {
        assert_eq!(display_name(Path::new("demos/portfolio.toml")), "portfolio.toml");
    }
}
