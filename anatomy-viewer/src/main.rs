mod catalog;
mod engine;
mod tools;

fn main() {
    engine::core::app_setup::create_app().run();
}
