//! Launchers handing deep links to the outside world.

use std::io::{self, Write};
use std::process::Stdio;

use locopedia_presenter::Launcher;
use tokio::process::{Child, Command};
use url::Url;

/// Prints each link on stdout, for piping into another opener.
pub(crate) struct PrintLauncher;

impl Launcher for PrintLauncher {
    fn launch(&self, url: &Url) {
        if let Err(e) = write_link(&mut io::stdout().lock(), url) {
            tracing::warn!(%url, error = %e, "failed to print deep link");
        }
    }
}

fn write_link(out: &mut impl Write, url: &Url) -> io::Result<()> {
    writeln!(out, "{url}")?;
    out.flush()
}

/// Spawns `program <url>` without waiting for it.
pub(crate) struct CommandLauncher {
    program: String,
}

impl CommandLauncher {
    #[must_use]
    pub(crate) fn new(program: String) -> Self {
        Self { program }
    }

    fn spawn(&self, url: &Url) -> io::Result<Child> {
        Command::new(&self.program)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .spawn()
    }
}

impl Launcher for CommandLauncher {
    fn launch(&self, url: &Url) {
        match self.spawn(url) {
            Ok(child) => {
                tracing::debug!(program = %self.program, pid = child.id(), "launcher started");
            }
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "failed to start launcher");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amsterdam_link() -> Url {
        Url::parse("abnamro-test://places?lat=52.3676&lon=4.9041").unwrap()
    }

    #[test]
    fn write_link_prints_one_line_per_link() {
        let mut out = Vec::new();
        write_link(&mut out, &amsterdam_link()).unwrap();
        write_link(&mut out, &amsterdam_link()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "abnamro-test://places?lat=52.3676&lon=4.9041\n\
             abnamro-test://places?lat=52.3676&lon=4.9041\n"
        );
    }

    #[tokio::test]
    async fn command_launcher_runs_program_to_completion() {
        let launcher = CommandLauncher::new("true".to_owned());
        let mut child = launcher.spawn(&amsterdam_link()).expect("true should spawn");
        assert!(child.wait().await.expect("true should exit").success());

        launcher.launch(&amsterdam_link());
    }

    #[tokio::test]
    async fn command_launcher_tolerates_missing_program() {
        let launcher = CommandLauncher::new("locopedia-no-such-opener".to_owned());
        assert!(launcher.spawn(&amsterdam_link()).is_err());

        launcher.launch(&amsterdam_link());
    }
}
