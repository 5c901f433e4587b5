use todo_api::api::api::start_server;

fn main() -> std::io::Result<()> {
    start_server()
}
