//! Browser entry point. Served with `dx serve` from this directory; images live in `public/`.

fn main() {
    // Runs with the compiled-in `SiteConfig` defaults; the browser has no config file.
    dioxus::launch(mfx_ui::App);
}
