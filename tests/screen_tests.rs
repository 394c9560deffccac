use battleships::{GameScreen, ScreenStack};

#[test]
fn test_starts_at_main_menu() {
    let screens = ScreenStack::new();
    assert_eq!(screens.current(), GameScreen::ViewingMainMenu);
    assert_eq!(screens.depth(), 2);
    assert_eq!(ScreenStack::default(), screens);
}

#[test]
fn test_push_and_pop() {
    let mut screens = ScreenStack::new();
    screens.push(GameScreen::Deploying);
    screens.switch(GameScreen::Discovering);
    screens.push(GameScreen::ViewingGameMenu);
    assert_eq!(screens.current(), GameScreen::ViewingGameMenu);
    assert_eq!(screens.pop(), GameScreen::Discovering);
    assert_eq!(screens.pop(), GameScreen::ViewingMainMenu);
}

#[test]
fn test_leaving_main_menu_quits() {
    let mut screens = ScreenStack::new();
    assert_eq!(screens.pop(), GameScreen::Quitting);
    assert_eq!(screens.pop(), GameScreen::Quitting);
    assert_eq!(screens.depth(), 1);
}

#[test]
fn test_return_to_main_menu() {
    let mut screens = ScreenStack::new();
    screens.push(GameScreen::Deploying);
    screens.push(GameScreen::Discovering);
    screens.push(GameScreen::EndingGame);
    screens.return_to_main_menu();
    assert_eq!(screens.current(), GameScreen::ViewingMainMenu);
    assert_eq!(screens.depth(), 2);
}
