// Clipboard access wrapper
//
// arboard needs a fresh handle per copy on some platforms; failures are
// reported to the caller so the UI can toast instead of panicking on
// headless systems without a clipboard.

pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}
