use std::time::Duration;

use kinetic_core::carousel::{driver, Carousel, CarouselConfig, CarouselEvent, Key};
use tokio::{sync::mpsc, time};

mod common;

use common::SharedDeck;

#[tokio::test(start_paused = true)]
async fn test_driver_auto_advances_on_schedule() {
    let deck = SharedDeck::new(3);
    let carousel = Carousel::new(deck.clone(), CarouselConfig::default(), driver::now()).unwrap();
    let (tx, rx) = mpsc::channel(8);
    let handle = tokio::spawn(driver::run(carousel, rx));

    time::sleep(Duration::from_millis(4900)).await;
    assert_eq!(deck.marked(), vec![0]);

    time::sleep(Duration::from_millis(200)).await;
    assert_eq!(deck.marked(), vec![1]);

    // 5000 + 800 settle + 5000 interval
    time::sleep(Duration::from_millis(5600)).await;
    assert_eq!(deck.marked(), vec![1]);
    time::sleep(Duration::from_millis(200)).await;
    assert_eq!(deck.marked(), vec![2]);

    drop(tx);
    let carousel = handle.await.unwrap();
    assert_eq!(carousel.current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_driver_rejects_input_while_settling() {
    let deck = SharedDeck::new(4);
    let carousel = Carousel::new(deck.clone(), CarouselConfig::default(), driver::now()).unwrap();
    let (tx, rx) = mpsc::channel(8);
    let handle = tokio::spawn(driver::run(carousel, rx));

    tx.send(CarouselEvent::Key(Key::ArrowRight)).await.unwrap();
    tx.send(CarouselEvent::IndicatorSelected(3)).await.unwrap();
    time::sleep(Duration::from_millis(100)).await;
    assert_eq!(deck.marked(), vec![1]);

    time::sleep(Duration::from_millis(800)).await;
    tx.send(CarouselEvent::IndicatorSelected(3)).await.unwrap();
    time::sleep(Duration::from_millis(10)).await;
    assert_eq!(deck.marked(), vec![3]);

    drop(tx);
    let carousel = handle.await.unwrap();
    assert_eq!(carousel.current_index(), 3);
    assert!(carousel.is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn test_driver_holds_while_hovered() {
    let deck = SharedDeck::new(2);
    let carousel = Carousel::new(deck.clone(), CarouselConfig::default(), driver::now()).unwrap();
    let (tx, rx) = mpsc::channel(8);
    let handle = tokio::spawn(driver::run(carousel, rx));

    tx.send(CarouselEvent::PointerEntered).await.unwrap();
    time::sleep(Duration::from_secs(30)).await;
    assert_eq!(deck.marked(), vec![0]);

    tx.send(CarouselEvent::PointerLeft).await.unwrap();
    time::sleep(Duration::from_millis(5100)).await;
    assert_eq!(deck.marked(), vec![1]);

    drop(tx);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_driver_swipe_and_custom_timing() {
    let deck = SharedDeck::new(3);
    let config = CarouselConfig::default()
        .with_auto_advance_interval(Duration::from_secs(60))
        .with_transition_duration(Duration::from_millis(100));
    let carousel = Carousel::new(deck.clone(), config, driver::now()).unwrap();
    let (tx, rx) = mpsc::channel(8);
    let handle = tokio::spawn(driver::run(carousel, rx));

    tx.send(CarouselEvent::TouchStart { x: 200.0, y: 50.0 }).await.unwrap();
    tx.send(CarouselEvent::TouchEnd { x: 260.0, y: 60.0 }).await.unwrap();
    time::sleep(Duration::from_millis(150)).await;
    assert_eq!(deck.marked(), vec![2]);

    tx.send(CarouselEvent::TouchStart { x: 200.0, y: 50.0 }).await.unwrap();
    tx.send(CarouselEvent::TouchEnd { x: 160.0, y: 50.0 }).await.unwrap();
    time::sleep(Duration::from_millis(150)).await;
    assert_eq!(deck.marked(), vec![2]);

    drop(tx);
    let carousel = handle.await.unwrap();
    assert_eq!(carousel.status().to_string(), "Slide 3/3 (auto-playing)");
}
