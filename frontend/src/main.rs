use credidesk_frontend::App;
use leptos::prelude::*;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

// 使用 lol_alloc 作为全局分配器以减小 WASM 体积
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

/// 将核心库的 tracing 事件输出到浏览器控制台
///
/// 浏览器没有系统时钟可用，因此不带时间戳。
fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(console)
        .with(level)
        .try_init();
}

pub fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_is_installed_once() {
        init_tracing();
        assert_eq!(LevelFilter::current(), LevelFilter::DEBUG);

        init_tracing();
        assert_eq!(LevelFilter::current(), LevelFilter::DEBUG);
    }
}
