//! Connect and disconnect the session's account

use newsproof::config::Config;
use newsproof::notice::Notice;
use newsproof::output::OutputMode;

/// Connect `account` and persist it
pub fn connect(account: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = Config::load();
    let mut session = config.session();
    session.connect(account);

    let Some(connected) = session.account() else {
        anyhow::bail!("Account address cannot be empty");
    };

    config.set_session(&session);
    config.save()?;
    Notice::success(format!("Connected {connected}")).render(mode);
    Ok(())
}

/// Forget the connected account
pub fn disconnect(mode: OutputMode) -> anyhow::Result<()> {
    let mut config = Config::load();
    let mut session = config.session();
    session.disconnect();

    config.set_session(&session);
    config.save()?;
    Notice::success("Disconnected").render(mode);
    Ok(())
}
