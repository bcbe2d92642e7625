#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/rlogdash.ico must exist
    let mut res = WindowsResource::new();
    res.set_icon("res/rlogdash.ico")
        .set("FileDescription", "rLogDash CLI")
        .set("ProductName", "rLogDash")
        .set("OriginalFilename", "rlogdash.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
