use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{spawn_computer_move, Difficulty, GameMode, GameResult, Player, Session, Settings};
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

fn session(delay: Duration) -> Arc<Mutex<Session>> {
    let settings = Settings {
        mode: GameMode::HumanVsComputer,
        difficulty: Difficulty::Heuristic,
        computer_delay: delay,
        ..Settings::default()
    };
    Arc::new(Mutex::new(Session::new(settings, SmallRng::seed_from_u64(42))))
}

#[tokio::test(start_paused = true)]
async fn computer_replies_after_delay() {
    let delay = Duration::from_millis(280);
    let session = session(delay);
    let task = {
        let mut s = session.lock().await;
        s.select_cell(0).unwrap();
        s.pending_computer_move().unwrap()
    };
    assert_eq!(task.delay(), delay);
    assert_eq!(task.player(), Player::O);

    let start = Instant::now();
    let outcome = spawn_computer_move(session.clone(), task).await.unwrap().unwrap();
    assert!(start.elapsed() >= delay);
    assert_eq!(outcome.index, 4);
    assert_eq!(outcome.result, GameResult::InProgress);

    let s = session.lock().await;
    assert_eq!(s.engine().turn(), Player::X);
    assert_eq!(s.engine().board().empty_count(), 7);
}

#[tokio::test(start_paused = true)]
async fn reset_during_delay_drops_the_move() {
    let session = session(Duration::from_millis(280));
    let task = {
        let mut s = session.lock().await;
        s.select_cell(0).unwrap();
        s.pending_computer_move().unwrap()
    };
    let handle = spawn_computer_move(session.clone(), task);
    session.lock().await.new_game();

    assert_eq!(handle.await.unwrap(), None);
    let s = session.lock().await;
    assert!(s.engine().board().is_empty());
    assert_eq!(s.engine().turn(), Player::X);
}

#[tokio::test(start_paused = true)]
async fn undo_during_delay_drops_the_move() {
    let session = session(Duration::from_millis(280));
    let task = {
        let mut s = session.lock().await;
        s.select_cell(4).unwrap();
        s.pending_computer_move().unwrap()
    };
    let handle = spawn_computer_move(session.clone(), task);
    assert!(session.lock().await.undo());

    assert_eq!(handle.await.unwrap(), None);
    assert!(session.lock().await.engine().board().is_empty());
}

#[tokio::test]
async fn zero_delay_gives_the_same_game() {
    let delayed = session(Duration::from_millis(5));
    let instant = session(Duration::ZERO);

    for s in [&delayed, &instant] {
        for cell in [0, 8, 6] {
            let task = {
                let mut guard = s.lock().await;
                if guard.select_cell(cell).is_none() {
                    break;
                }
                match guard.pending_computer_move() {
                    Some(task) => task,
                    None => break,
                }
            };
            spawn_computer_move(s.clone(), task).await.unwrap();
        }
    }

    let a = delayed.lock().await.engine().state();
    let b = instant.lock().await.engine().state();
    assert_eq!(a, b);
}

#[tokio::test]
async fn finished_game_schedules_nothing() {
    let session = session(Duration::ZERO);
    let mut s = session.lock().await;
    s.set_mode(GameMode::HumanVsHuman);
    for cell in [0, 3, 1, 4, 2] {
        s.select_cell(cell).unwrap();
    }
    assert_eq!(s.engine().result(), GameResult::Win(Player::X));
    s.set_mode(GameMode::HumanVsComputer);
    assert_eq!(s.engine().result(), GameResult::InProgress);
    assert!(s.pending_computer_move().is_none());
    assert_eq!(s.scores().x_wins, 1);
}
