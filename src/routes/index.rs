use actix_web::HttpResponse;

/******************************************/
// Greeting route
/******************************************/
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Coffee Shop Practice Challenge</h1>")
}
