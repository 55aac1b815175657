use kecinfor_store::dto::banners::BannerCarousel;
use tera::{Context, Tera};

fn tera() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .expect("templates should parse")
}

fn home_context() -> Context {
    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert("current_user", &None::<String>);
    context.insert("current_page", "index");
    context.insert("login_url", "https://auth.example.com");
    context.insert("carousel", &BannerCarousel::Loading);
    context
}

#[test]
fn home_page_ships_the_empty_placeholder_for_failed_fetches() {
    let html = tera()
        .render("main/index.html", &home_context())
        .expect("home page should render");

    assert!(html.contains("carousel-loading"));
    assert!(html.contains(r#"<template id="banner-carousel-empty">"#));
    assert!(html.contains("Os melhores produtos em tecnologia"));
    assert!(html.contains("response.ok"));
    assert!(html.contains("showEmpty()"));
}

#[test]
fn empty_carousel_fragment_matches_the_fallback_placeholder() {
    let tera = tera();
    let mut context = Context::new();
    context.insert("carousel", &BannerCarousel::Empty);
    context.insert("autoplay_ms", &4000u64);

    let fragment = tera
        .render("banners/carousel.html", &context)
        .expect("fragment should render");
    let placeholder = tera
        .render("banners/empty.html", &Context::new())
        .expect("placeholder should render");

    assert_eq!(fragment.trim(), placeholder.trim());
    assert!(placeholder.contains("KECINFORSTORE"));
}
