use prefix_router::{router_service, Params};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::{Body, Request, Response, StatusCode};
use tracing_subscriber::EnvFilter;

async fn not_found(req: Request<Body>, _: Params) -> Result<Response<Body>, Never> {
    tracing::info!(method = %req.method(), path = req.uri().path(), "not found");
    let mut res = Response::new(Body::from("404 Not Found"));
    *res.status_mut() = StatusCode::NOT_FOUND;
    Ok(res)
}

async fn hello(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap_or("stranger");
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn post(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let body = match params.require::<u64>("post_id") {
        Ok(id) => format!("post #{} by {}", id, params.get("user").unwrap_or("")),
        Err(e) => e.to_string(),
    };
    Ok(Response::new(Body::from(body)))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("prefix_router=debug".parse().unwrap()),
        )
        .init();

    let router = router_service! {
        GET "/hello/:name" => hello,
        @ "/api/v1" => router_service!{
            GET "/users/:user/posts/:post_id" => post
        };
        _ => not_found
    }
    .into_shared();

    let make = make_service_fn(|_| {
        let router = router.clone();
        async move { Ok::<_, Never>(router) }
    });

    let addr = ([127, 0, 0, 1], 3000).into();

    let server = hyper::Server::bind(&addr).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("api: http://{}/api/v1/users/alice/posts/1", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    if let Err(e) = server.await {
        eprintln!("server error: {}", e);
    }
}
