use nannou::color::{
    BLACK, BLUE, BROWN, GOLD, GREEN, LIGHTBLUE, LIGHTGREEN, ORANGE, RED, Srgb, WHITE,
};
use nannou::event::{Key, Update};
use nannou::geom::{Point2, Rect, pt2};
use nannou::{App, Draw, Frame};
use rand::random_range;

use snakeladder::game::{
    Board, Die, GRID_SIZE, Game, GameOutcome, LAST_CELL, MAX_PLAYERS, MIN_PLAYERS, Transition,
    TurnReport,
};

fn main() {
    nannou::app(model).update(update).run();
}

const BOARD_SIZE: f32 = 500.0;
const CELL_SIZE: f32 = BOARD_SIZE / GRID_SIZE as f32;
const DICE_ROLL_FRAMES: u32 = 60;
const MESSAGE_FRAMES: u32 = 120;
const STEP_SPEED: f32 = 0.1;
const SLIDE_SPEED: f32 = 0.05;

const PLAYER_COLORS: [Srgb<u8>; 4] = [RED, BLUE, GREEN, GOLD];

struct Model {
    game: Game,
    state: State,
    dice_face: u8,
    message: Option<Message>,
}

#[derive(Clone, Copy)]
enum State {
    Setup { player_count: usize },
    AwaitRoll,
    RollingDice { frames_left: u32 },
    Moving { report: TurnReport, phase: MovePhase },
    GameOver { winner: u8 },
}

#[derive(Clone, Copy)]
enum MovePhase {
    Stepping { at: u8, progress: f32 },
    Sliding { progress: f32 },
}

struct Message {
    text: String,
    frames_left: u32,
}

impl Message {
    fn show(text: String) -> Option<Self> {
        Some(Message { text, frames_left: MESSAGE_FRAMES })
    }
}

fn model(app: &App) -> Model {
    app.new_window()
        .size(800, 600)
        .title("Snake and Ladder")
        .key_pressed(key_pressed)
        .view(view)
        .build()
        .unwrap();

    Model {
        game: Game::new(MIN_PLAYERS).expect("minimum player count is valid"),
        state: State::Setup { player_count: MIN_PLAYERS },
        dice_face: 1,
        message: None,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    if let Some(message) = &mut model.message {
        if message.frames_left == 0 {
            model.message = None;
        } else {
            message.frames_left -= 1;
        }
    }

    model.state = match model.state {
        state @ (State::Setup { .. } | State::AwaitRoll | State::GameOver { .. }) => state,
        State::RollingDice { frames_left } => {
            model.dice_face = random_range(1..=6);
            if frames_left > 0 {
                State::RollingDice { frames_left: frames_left - 1 }
            } else {
                let report = model.game.apply_roll(Die::new(model.dice_face));
                if report.rejected {
                    model.message = Message::show(format!(
                        "Player {} rolled a {} and needs an exact roll",
                        report.player, report.rolled
                    ));
                    State::AwaitRoll
                } else {
                    model.message = Message::show(format!(
                        "Player {} rolled a {}",
                        report.player, report.rolled
                    ));
                    State::Moving {
                        report,
                        phase: MovePhase::Stepping { at: report.from, progress: 0.0 },
                    }
                }
            }
        }
        State::Moving { report, phase } => match phase {
            MovePhase::Stepping { at, progress } => {
                let progress = progress + STEP_SPEED;
                if progress < 1.0 {
                    State::Moving { report, phase: MovePhase::Stepping { at, progress } }
                } else if at + 1 < report.landed {
                    State::Moving {
                        report,
                        phase: MovePhase::Stepping { at: at + 1, progress: 0.0 },
                    }
                } else {
                    match report.transition {
                        Some(Transition::Snake { head, .. }) => {
                            model.message = Message::show(format!(
                                "Player {} landed on a snake at {}!",
                                report.player, head
                            ));
                            State::Moving { report, phase: MovePhase::Sliding { progress: 0.0 } }
                        }
                        Some(Transition::Ladder { bottom, .. }) => {
                            model.message = Message::show(format!(
                                "Player {} found a ladder at {}!",
                                report.player, bottom
                            ));
                            State::Moving { report, phase: MovePhase::Sliding { progress: 0.0 } }
                        }
                        None => finish_turn(model),
                    }
                }
            }
            MovePhase::Sliding { progress } => {
                let progress = progress + SLIDE_SPEED;
                if progress < 1.0 {
                    State::Moving { report, phase: MovePhase::Sliding { progress } }
                } else {
                    finish_turn(model)
                }
            }
        },
    };
}

fn finish_turn(model: &mut Model) -> State {
    match model.game.outcome() {
        GameOutcome::Win(winner) => {
            model.message = Message::show(format!("Player {} wins!", winner));
            State::GameOver { winner }
        }
        GameOutcome::Ongoing => State::AwaitRoll,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match model.state {
        State::Setup { player_count } => match key {
            Key::Up => {
                model.state = State::Setup { player_count: (player_count + 1).min(MAX_PLAYERS) };
            }
            Key::Down => {
                model.state = State::Setup { player_count: (player_count - 1).max(MIN_PLAYERS) };
            }
            Key::Return => {
                model.game = Game::new(player_count).expect("player count is clamped in setup");
                model.message = None;
                model.state = State::AwaitRoll;
            }
            _ => {}
        },
        State::AwaitRoll => {
            if key == Key::Space {
                model.state = State::RollingDice { frames_left: DICE_ROLL_FRAMES };
            }
        }
        State::GameOver { .. } => {
            if key == Key::R {
                model.message = None;
                model.state = State::Setup { player_count: model.game.players().len() };
            }
        }
        _ => {}
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let window_rect = app.window_rect();

    if let State::Setup { player_count } = model.state {
        draw.text("Select number of players")
            .x_y(0.0, 50.0)
            .w(500.0)
            .font_size(30)
            .color(BLACK);
        draw.text(&player_count.to_string())
            .x_y(0.0, 0.0)
            .font_size(36)
            .color(BLACK);
        draw.text("UP/DOWN to change, ENTER to start")
            .x_y(0.0, -50.0)
            .w(500.0)
            .font_size(16)
            .color(BLACK);
        draw.to_frame(app, &frame).unwrap();
        return;
    }

    let board_rect = Rect::from_w_h(BOARD_SIZE, BOARD_SIZE);

    draw_board(&draw, &board_rect, model.game.board());
    draw_transitions(&draw, &board_rect, model.game.board());
    draw_players(&draw, &board_rect, model);
    draw_dice(&draw, &window_rect, model.dice_face);
    draw_panel(&draw, &window_rect, model);

    if let Some(message) = &model.message {
        draw.text(&message.text)
            .x_y(0.0, window_rect.top() - 25.0)
            .w(600.0)
            .font_size(22)
            .color(BLACK);
    }

    match model.state {
        State::AwaitRoll => {
            draw.text("Press SPACE to roll the die")
                .x_y(window_rect.right() - 130.0, window_rect.bottom() + 25.0)
                .w(240.0)
                .font_size(14)
                .color(BLACK);
        }
        State::GameOver { winner } => {
            draw.text(&format!("Player {} wins!", winner))
                .x_y(0.0, window_rect.bottom() + 35.0)
                .w(400.0)
                .font_size(26)
                .color(BLACK);
            draw.text("Press R to play again")
                .x_y(0.0, window_rect.bottom() + 12.0)
                .w(400.0)
                .font_size(14)
                .color(BLACK);
        }
        _ => {}
    }

    draw.to_frame(app, &frame).unwrap();
}

fn draw_board(draw: &Draw, board_rect: &Rect, board: &Board) {
    draw.rect()
        .x_y(board_rect.x(), board_rect.y())
        .w_h(board_rect.w(), board_rect.h())
        .color(LIGHTBLUE);

    for cell in 1..=LAST_CELL {
        let center = cell_point(board_rect, cell);
        match board.transition(cell) {
            Some(Transition::Snake { .. }) => {
                draw.rect().xy(center).w_h(CELL_SIZE, CELL_SIZE).color(ORANGE);
            }
            Some(Transition::Ladder { .. }) => {
                draw.rect().xy(center).w_h(CELL_SIZE, CELL_SIZE).color(LIGHTGREEN);
            }
            None => {}
        }
        draw.text(&cell.to_string())
            .xy(center)
            .font_size(12)
            .color(BLACK);
    }

    for i in 0..=GRID_SIZE {
        let offset = i as f32 * CELL_SIZE;
        draw.line()
            .start(pt2(board_rect.left() + offset, board_rect.bottom()))
            .end(pt2(board_rect.left() + offset, board_rect.top()))
            .color(BLACK);
        draw.line()
            .start(pt2(board_rect.left(), board_rect.bottom() + offset))
            .end(pt2(board_rect.right(), board_rect.bottom() + offset))
            .color(BLACK);
    }
}

fn draw_transitions(draw: &Draw, board_rect: &Rect, board: &Board) {
    for (head, tail) in board.snakes() {
        let head_point = cell_point(board_rect, head);
        let tail_point = cell_point(board_rect, tail);
        draw.polyline()
            .weight(3.0)
            .points(curve_points(head_point, tail_point, 0.3, 12))
            .color(RED);
        draw.ellipse().xy(head_point).radius(5.0).color(RED);
        draw.ellipse().xy(tail_point).radius(5.0).color(ORANGE);
    }

    for (bottom, top) in board.ladders() {
        let bottom_point = cell_point(board_rect, bottom);
        let top_point = cell_point(board_rect, top);
        let rail = top_point - bottom_point;
        let length = rail.length();
        if length == 0.0 {
            continue;
        }
        let along = rail / length;
        let perp = pt2(-along.y, along.x) * 5.0;

        draw.line()
            .start(bottom_point + perp)
            .end(top_point + perp)
            .weight(2.0)
            .color(BROWN);
        draw.line()
            .start(bottom_point - perp)
            .end(top_point - perp)
            .weight(2.0)
            .color(BROWN);

        let rungs = ((length / 30.0) as usize).max(2);
        for i in 0..rungs {
            let t = i as f32 / (rungs - 1) as f32;
            let center = bottom_point + along * length * t;
            draw.line()
                .start(center + perp)
                .end(center - perp)
                .weight(2.0)
                .color(BROWN);
        }
    }
}

fn draw_players(draw: &Draw, board_rect: &Rect, model: &Model) {
    for player in model.game.players() {
        let base = match model.state {
            State::Moving { report, phase } if report.player == player.id() => {
                token_point(board_rect, &report, phase)
            }
            _ => cell_point(board_rect, player.position()),
        };
        let center = base + token_offset(player.id());
        draw.ellipse()
            .xy(center)
            .radius(CELL_SIZE / 4.0)
            .color(player_color(player.id()))
            .stroke(BLACK)
            .stroke_weight(2.0);
        draw.text(&player.id().to_string())
            .xy(center)
            .font_size(14)
            .color(WHITE);
    }
}

fn draw_dice(draw: &Draw, window_rect: &Rect, face: u8) {
    let size = 60.0;
    let center = pt2(window_rect.right() - 70.0, 0.0);
    draw.rect()
        .xy(center)
        .w_h(size, size)
        .color(WHITE)
        .stroke(BLACK)
        .stroke_weight(2.0);
    for &(dx, dy) in dice_pips(face) {
        draw.ellipse()
            .xy(center + pt2((dx - 0.5) * size, (dy - 0.5) * size))
            .radius(size / 10.0)
            .color(BLACK);
    }
}

fn draw_panel(draw: &Draw, window_rect: &Rect, model: &Model) {
    let x = window_rect.left() + 25.0;
    let mut y = window_rect.top() - 40.0;
    for player in model.game.players() {
        draw.ellipse()
            .x_y(x, y)
            .radius(10.0)
            .color(player_color(player.id()));
        if player.id() == model.game.active_player().id() && !model.game.is_over() {
            draw.ellipse()
                .x_y(x, y)
                .radius(13.0)
                .no_fill()
                .stroke(BLACK)
                .stroke_weight(2.0);
        }
        draw.text(&format!("Player {}: {}", player.id(), player.position()))
            .x_y(x + 85.0, y)
            .w(130.0)
            .font_size(14)
            .color(BLACK)
            .left_justify();
        y -= 30.0;
    }
}

fn player_color(id: u8) -> Srgb<u8> {
    PLAYER_COLORS[(id as usize - 1) % PLAYER_COLORS.len()]
}

/// Center of a cell in window coordinates. Cell 0 is the starting spot
/// left of the bottom row.
fn cell_point(board_rect: &Rect, cell: u8) -> Point2 {
    if cell == 0 {
        return pt2(board_rect.left() - 50.0, board_rect.bottom() + CELL_SIZE / 2.0);
    }
    let (col, row) = Board::grid_position(cell);
    pt2(
        board_rect.left() + col as f32 * CELL_SIZE + CELL_SIZE / 2.0,
        board_rect.bottom() + row as f32 * CELL_SIZE + CELL_SIZE / 2.0,
    )
}

fn token_point(board_rect: &Rect, report: &TurnReport, phase: MovePhase) -> Point2 {
    match phase {
        MovePhase::Stepping { at, progress } => {
            let from = cell_point(board_rect, at);
            let to = cell_point(board_rect, (at + 1).min(report.landed));
            from + (to - from) * progress
        }
        MovePhase::Sliding { progress } => {
            let from = cell_point(board_rect, report.landed);
            let to = cell_point(board_rect, report.final_cell);
            from + (to - from) * progress
        }
    }
}

fn token_offset(id: u8) -> Point2 {
    pt2(
        ((id - 1) % 2) as f32 * 20.0 - 10.0,
        ((id - 1) / 2) as f32 * 20.0 - 10.0,
    )
}

fn dice_pips(face: u8) -> &'static [(f32, f32)] {
    match face {
        1 => &[(0.5, 0.5)],
        2 => &[(0.25, 0.25), (0.75, 0.75)],
        3 => &[(0.25, 0.25), (0.5, 0.5), (0.75, 0.75)],
        4 => &[(0.25, 0.25), (0.25, 0.75), (0.75, 0.25), (0.75, 0.75)],
        5 => &[
            (0.25, 0.25),
            (0.25, 0.75),
            (0.5, 0.5),
            (0.75, 0.25),
            (0.75, 0.75),
        ],
        _ => &[
            (0.25, 0.25),
            (0.25, 0.5),
            (0.25, 0.75),
            (0.75, 0.25),
            (0.75, 0.5),
            (0.75, 0.75),
        ],
    }
}

/// Samples a quadratic Bezier between `start` and `end`, bulging sideways
/// by `curvature` times the segment length.
fn curve_points(start: Point2, end: Point2, curvature: f32, segments: usize) -> Vec<Point2> {
    let span = end - start;
    let length = span.length();
    if length == 0.0 {
        return vec![start, end];
    }
    let mid = (start + end) / 2.0;
    let perp = pt2(-span.y, span.x) / length;
    let control = mid + perp * length * curvature;
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            start * (1.0 - t) * (1.0 - t) + control * 2.0 * (1.0 - t) * t + end * t * t
        })
        .collect()
}
