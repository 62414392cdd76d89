//! Initialize the newsproof config

use newsproof::config::Config;
use newsproof::core::ports::ContractBackend;
use newsproof::notice::Notice;
use newsproof::output::OutputMode;

/// Write a default config for `backend`
pub fn init(backend: ContractBackend, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Config::config_path();

    if path.exists() && !force {
        Notice::success(format!(
            "Already initialized ({} exists). Use --force to reinitialize.",
            path.display()
        ))
        .render(mode);
        return Ok(());
    }

    let mut config = Config::default();
    config.contract.backend = backend;
    config.save_to(&path)?;

    if mode == OutputMode::Human {
        println!("Initializing newsproof...\n");
        println!("  Created {}", path.display());
        println!("  Backend: {backend}");
        if backend == ContractBackend::File {
            println!("  Data file: {}", config.contract_path().display());
        } else {
            println!("  Note: the memory backend starts empty and does not persist between runs");
        }
        println!("\nNext steps:");
        println!("  newsproof connect <account>");
        println!("  newsproof submit --source <source> --content <content>");
    } else {
        Notice::success(format!("Created {}", path.display())).render(mode);
    }

    Ok(())
}
