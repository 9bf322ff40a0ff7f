use axum::serve;
use f1widgets_backend::routes::make_app;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let (app, config) = match make_app().await {
        Ok(res) => res,
        Err(err) => panic!("{}", err),
    };

    // Bind to a TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await;
    println!("Listening on http://{}", config.bind_addr);

    match listener {
        Ok(res) => serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}
