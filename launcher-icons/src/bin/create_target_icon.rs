use launcher_icons::generate::generate_all;
use launcher_icons_logging::{TracingSink, init_tracing};

fn main() {
    init_tracing();
    let res_dir = launcher_icons::config::res_dir();
    tracing::debug!(res_dir = %res_dir.display(), "generate_start");
    generate_all(&TracingSink);
}
