use anyhow::Result;
use gitconf::config::GitConfig;

pub fn handle_commit(config: &mut GitConfig) -> Result<()> {
    println!("{}", config.commit()?);
    Ok(())
}

pub fn handle_branch(config: &mut GitConfig) -> Result<()> {
    println!("{}", config.branches().current()?);
    Ok(())
}

pub fn handle_published(config: &mut GitConfig) -> Result<()> {
    for branch in config.branches().published()? {
        println!("{branch}");
    }
    Ok(())
}
