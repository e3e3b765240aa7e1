#[cfg(windows)]
fn main() {
    let mut res = winres::WindowsResource::new();
    res.set_icon("assets/icon/icon.ico")
        .set("ProductName", "Screen Light")
        .set("FileDescription", "Screen Light")
        .set("InternalName", "screenlight");
    res.compile().unwrap();
}

#[cfg(not(windows))]
fn main() {}
