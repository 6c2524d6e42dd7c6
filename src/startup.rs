// Startup module - displays banner and module status
//
// Printed before the TUI takes over the screen (or in headless mode), and
// replayed into the logs panel once the TUI is up.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Module loading result for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the startup banner and module status
pub fn print_startup(config: &Config) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Student Roster{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Terminal front end for a Student Directory service{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    println!("  {DIM}Loading modules...{RESET}");
    for module in &module_status(config) {
        print_module_status(module);
    }
    println!();

    println!(
        "  {MAGENTA}▸{RESET} Service {BOLD}{}{RESET} {DIM}(timeout {}s){RESET}",
        config.service_url, config.request_timeout_secs
    );
    if config.demo_mode {
        println!("  {YELLOW}▸{RESET} {YELLOW}Demo mode active{RESET} {DIM}(in-memory directory){RESET}");
    }
    println!();
}

fn module_status(config: &Config) -> Vec<ModuleStatus> {
    vec![
        ModuleStatus {
            name: "directory",
            enabled: true,
            description: "HTTP client",
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface",
        },
        ModuleStatus {
            name: "demo",
            enabled: config.demo_mode,
            description: "In-memory directory",
        },
        ModuleStatus {
            name: "file-logs",
            enabled: config.logging.file_enabled,
            description: "JSON log files",
        },
    ]
}

fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

/// Print startup messages to the TUI log panel
pub fn log_startup(config: &Config) {
    tracing::info!("═══════════════════════════════════");
    tracing::info!("  🎓 STUDENT ROSTER v{}", VERSION);
    tracing::info!("═══════════════════════════════════");

    for module in &module_status(config) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    tracing::info!("▸ Service {}", config.service_url);
    if config.demo_mode {
        tracing::info!("▸ Demo mode active (in-memory directory)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_status_follows_config() {
        let config = Config {
            enable_tui: false,
            demo_mode: true,
            ..Config::default()
        };
        let modules = module_status(&config);

        let enabled = |name: &str| modules.iter().find(|m| m.name == name).map(|m| m.enabled);
        assert_eq!(enabled("directory"), Some(true));
        assert_eq!(enabled("tui"), Some(false));
        assert_eq!(enabled("demo"), Some(true));
        assert_eq!(enabled("file-logs"), Some(false));
    }
}
