use safe_replace_core::current_exe_path;

pub fn current_exe() -> miette::Result<()> {
    println!("{}", current_exe_path()?.display());

    Ok(())
}
