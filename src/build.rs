// build.rs
fn main() -> std::io::Result<()> {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/unifhorce.ico");
        res.compile()?;
    }
    Ok(())
}
