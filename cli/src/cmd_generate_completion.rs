// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::generate;
use tokio::fs;

use crate::Cli;

#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate a completion script for the timetable command")
            .hide(true)
            .arg(
                arg!(shell: [SHELL] "Target shell, detected from $SHELL when omitted")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --output <FILE> "Write the script to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let shell = match matches.get_one::<Shell>("shell") {
            Some(shell) => *shell,
            None => Shell::from_env()
                .ok_or("Cannot detect the shell from $SHELL, please name it explicitly")?,
        };
        Ok(Self {
            shell,
            output: matches.get_one("output").cloned(),
        })
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        let mut script = Vec::new();
        self.shell.generate(&mut script);
        match &self.output {
            Some(path) => fs::write(path, script)
                .await
                .map_err(|e| format!("Failed to write completion to {}: {e}", path.display()))?,
            None => io::stdout().write_all(&script)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    fn from_env() -> Option<Self> {
        let path = std::env::var_os("SHELL")?;
        Self::from_shell_path(Path::new(&path))
    }

    /// Recognizes a shell by its executable, such as `/usr/bin/zsh` or `pwsh.exe`.
    fn from_shell_path(path: &Path) -> Option<Self> {
        match path.file_stem()?.to_str()? {
            "bash" => Some(Shell::Bash),
            "elvish" => Some(Shell::Elvish),
            "fish" => Some(Shell::Fish),
            "nu" => Some(Shell::Nushell),
            "pwsh" | "powershell" => Some(Shell::PowerShell),
            "zsh" => Some(Shell::Zsh),
            _ => None,
        }
    }

    /// Writes the completion script for the whole command tree to `buf`.
    fn generate(self, buf: &mut impl Write) {
        use clap_complete::Shell as ClapShell;

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        match self {
            Shell::Bash => generate(ClapShell::Bash, &mut cmd, name, buf),
            Shell::Elvish => generate(ClapShell::Elvish, &mut cmd, name, buf),
            Shell::Fish => generate(ClapShell::Fish, &mut cmd, name, buf),
            Shell::PowerShell => generate(ClapShell::PowerShell, &mut cmd, name, buf),
            Shell::Zsh => generate(ClapShell::Zsh, &mut cmd, name, buf),
            Shell::Nushell => generate(clap_complete_nushell::Nushell {}, &mut cmd, name, buf),
        }
    }
}
