#![cfg(feature = "hyper-service")]

use prefix_router::{
    router_service, BoxHandler, HttpRouter, Params, RouterService, NOT_FOUND_BODY,
};

use std::convert::Infallible as Never;

use hyper::service::Service;
use hyper::{Body, Request, Response, StatusCode};

async fn hello(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap_or("anonymous").to_owned();
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn post(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let body = match params.require::<u32>("post_id") {
        Ok(id) => format!("post {} of {}", id, params.get("id").unwrap_or("")),
        Err(e) => e.to_string(),
    };
    Ok(Response::new(Body::from(body)))
}

async fn gone(req: Request<Body>, _: Params) -> Result<Response<Body>, Never> {
    let mut res = Response::new(Body::from(format!("nothing at {}", req.uri().path())));
    *res.status_mut() = StatusCode::GONE;
    Ok(res)
}

async fn send<S>(service: &mut S, method: &str, uri: &str) -> (StatusCode, String)
where
    S: Service<Request<Body>, Response = Response<Body>>,
    S::Error: std::fmt::Debug,
{
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let res = service.call(req).await.unwrap();
    let status = res.status();
    let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn dispatch_with_params() {
    let mut service = router_service! {
        GET "/hello/:name" => hello,
        GET "/users/:id/posts/:post_id" => post;
        _ => gone
    };

    assert_eq!(
        send(&mut service, "GET", "/hello/world").await,
        (StatusCode::OK, "hello, world!".to_owned())
    );
    assert_eq!(
        send(&mut service, "GET", "/users/42/posts/7").await,
        (StatusCode::OK, "post 7 of 42".to_owned())
    );

    let (status, body) = send(&mut service, "GET", "/users/42/posts/seven").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("invalid path parameter \"post_id\""), "{}", body);
}

#[tokio::test]
async fn not_found_handler() {
    let mut service = router_service! {
        GET "/hello/:name" => hello;
        _ => gone
    };

    assert_eq!(
        send(&mut service, "GET", "/nowhere").await,
        (StatusCode::GONE, "nothing at /nowhere".to_owned())
    );
    // method without any table
    assert_eq!(send(&mut service, "POST", "/hello/world").await.0, StatusCode::GONE);
}

#[tokio::test]
async fn default_not_found() {
    let mut router: HttpRouter<BoxHandler> = HttpRouter::new();
    router.get("/hello/:name", hello);
    let mut service: RouterService = router.into_service();

    assert_eq!(
        send(&mut service, "GET", "/hello/a/b").await,
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY.to_owned())
    );
}

#[tokio::test]
async fn mounted_service_routes() {
    let mut service = router_service! {
        GET "/hello/:name" => hello,
        @ "/api/v1" => router_service!{
            GET "/greet/:name" => hello
        };
        _ => gone
    };

    assert_eq!(
        send(&mut service, "GET", "/api/v1/greet/rust").await,
        (StatusCode::OK, "hello, rust!".to_owned())
    );
    assert_eq!(send(&mut service, "GET", "/api/v1/greet").await.0, StatusCode::GONE);
}

#[tokio::test]
async fn shared_service_replace() {
    let mut first: HttpRouter<BoxHandler> = HttpRouter::new();
    first.get("/hello/:name", hello);
    let mut shared = first.into_service().into_shared();
    let mut observer = shared.clone();

    assert_eq!(send(&mut shared, "GET", "/hello/x").await.0, StatusCode::OK);
    assert_eq!(send(&mut shared, "GET", "/bye").await.0, StatusCode::NOT_FOUND);

    let mut second: HttpRouter<BoxHandler> = HttpRouter::new();
    second.get("/bye", gone);
    shared.replace(second.into_service());

    assert_eq!(send(&mut observer, "GET", "/bye").await.0, StatusCode::GONE);
    assert_eq!(
        send(&mut observer, "GET", "/hello/x").await.0,
        StatusCode::NOT_FOUND
    );
    assert_eq!(shared.load().router().len(), 1);
}
