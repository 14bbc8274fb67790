use murmur_frontend::{telemetry, App};

fn main() {
    telemetry::init();
    yew::Renderer::<App>::new().render();
}
