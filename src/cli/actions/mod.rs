pub mod server;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        secret: Option<String>,
        production: bool,
    },
}
