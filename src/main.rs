use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use yshell::config::ShellConfig;
use yshell::logging::init_logging;
use yshell::shell::{ExecResult, Shell, ShellOptions};

const EXEC_NAME: &str = "yshell";

#[derive(Parser)]
#[command(name = "yshell")]
#[command(about = "A shell over an in-memory inode tree")]
#[command(version)]
struct Cli {
    /// Debug flags: c (commands), i (inodes), p (paths), y (session), @ (all)
    #[arg(short = '@', value_name = "FLAGS")]
    debug_flags: Option<String>,

    /// TOML file with session options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial prompt
    #[arg(long)]
    prompt: Option<String>,

    /// Echo each input line before running it
    #[arg(long)]
    echo: bool,

    /// Execute newline-separated commands from the argument
    #[arg(short = 'c')]
    commands: Option<String>,

    /// Output results as JSON (stdout, stderr, exitCode); with -c or a script
    #[arg(long = "json")]
    json: bool,

    /// Script file to execute
    #[arg()]
    script_file: Option<PathBuf>,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", EXEC_NAME, message);
    std::process::exit(1);
}

fn print_result(result: &ExecResult, json: bool) {
    if json {
        println!("{}", serde_json::json!({
            "stdout": result.stdout,
            "stderr": result.stderr,
            "exitCode": result.exit_code,
        }));
    } else {
        print!("{}", result.stdout);
        for line in result.stderr.lines() {
            eprintln!("{}: {}", EXEC_NAME, line);
        }
    }
}

/// Reads commands from stdin until end of input or `exit`.
fn run_repl(shell: &mut Shell, echo: bool) -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = std::io::stdout();
    let mut line = String::new();
    loop {
        if interactive || echo {
            write!(stdout, "{}", shell.prompt())?;
            stdout.flush()?;
        }
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            if interactive || echo {
                writeln!(stdout)?;
            }
            return Ok(());
        }
        if echo {
            writeln!(stdout, "{}", line.trim_end())?;
        }
        let result = shell.exec_line(&line);
        print_result(&result, false);
        if shell.has_exited() {
            return Ok(());
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ShellConfig::load(path).unwrap_or_else(|e| fail(e)),
        None => ShellConfig::default(),
    };

    let flags = cli.debug_flags.or(config.debug_flags).unwrap_or_default();
    if let Err(e) = init_logging(&flags) {
        fail(e);
    }

    let mut shell = Shell::new(ShellOptions {
        prompt: cli.prompt.or(config.prompt),
    });

    // Determine script source: -c, file, or stdin
    let script = if let Some(commands) = cli.commands {
        Some(commands)
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => Some(content),
            Err(e) => fail(format!("Cannot read script file: {}: {}", file.display(), e)),
        }
    } else {
        None
    };

    let status = match script {
        Some(script) => {
            let result = shell.exec(&script);
            print_result(&result, cli.json);
            result.exit_code
        }
        None => {
            let echo = cli.echo || config.echo.unwrap_or(!std::io::stdin().is_terminal());
            if let Err(e) = run_repl(&mut shell, echo) {
                fail(e);
            }
            shell.exit_status()
        }
    };

    if !cli.json {
        eprintln!("{}: exit({})", EXEC_NAME, status);
    }
    std::process::exit(status);
}
