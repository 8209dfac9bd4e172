use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use course_services::{
    ActiveQuiz, CourseGateway, CourseProgressService, FlashcardService, HttpCourseGateway,
    InMemoryGateway, QuizContent, QuizLoopService, Shuffle, SubmittedQuiz,
};
use quiz_core::model::{
    ChapterPage, CourseId, CourseListing, CourseQuery, CourseSort, FlashcardSetId, ProgressBadge,
    QuestionDraft, QuizId,
};
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod prompt;

use prompt::{Choice, Nav, parse_choice, parse_nav};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidSort { raw: String },
    InvalidChapter { raw: String },
    InvalidId { flag: &'static str, raw: String },
    MissingFlag { flag: &'static str },
    ConflictingSources,
    MissingApiUrl,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidSort { raw } => write!(
                f,
                "invalid --sort value: {raw} (expected none, progress, title or difficulty)"
            ),
            ArgsError::InvalidChapter { raw } => write!(f, "invalid --chapter value: {raw}"),
            ArgsError::InvalidId { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
            ArgsError::MissingFlag { flag } => write!(f, "{flag} is required"),
            ArgsError::ConflictingSources => {
                write!(f, "--file and --quiz-id cannot be used together")
            }
            ArgsError::MissingApiUrl => write!(f, "LEARN_API_URL must be set for this command"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_seed(raw: String) -> Result<Shuffle, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Shuffle::seeded)
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz quiz     (--file <path> | --quiz-id <id>) [--seed <n>] [--no-shuffle]");
    eprintln!("  quiz courses  [--search <text>] [--sort none|progress|title|difficulty]");
    eprintln!("  quiz chapter  --course-id <id> --chapter <index> [--narrate]");
    eprintln!("  quiz complete --course-id <id> --chapter <index>");
    eprintln!("  quiz flashcards [--set-id <id>]");
    eprintln!();
    eprintln!("Chapter indices start at 0.");
    eprintln!();
    eprintln!("While answering:");
    eprintln!("  <number> or option text to answer, n = next, b = back, q = quit");
    eprintln!("While reading:");
    eprintln!("  Enter = next page (flashcards: flip), n = next, b = back, q = quit");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LEARN_API_URL, LEARN_API_TOKEN, LEARN_QUIZ_SEED, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quiz,
    Courses,
    Chapter,
    Complete,
    Flashcards,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "quiz" => Some(Self::Quiz),
            "courses" => Some(Self::Courses),
            "chapter" => Some(Self::Chapter),
            "complete" => Some(Self::Complete),
            "flashcards" => Some(Self::Flashcards),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum QuizSource {
    File(PathBuf),
    Remote(QuizId),
}

#[derive(Debug)]
struct QuizArgs {
    source: QuizSource,
    shuffle: Shuffle,
}

impl QuizArgs {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_seed: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut shuffle = match env_seed {
            Some(raw) => parse_seed(raw)?,
            None => Shuffle::Random,
        };
        let mut source = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" => {
                    let value = require_value(args, "--file")?;
                    if source.is_some() {
                        return Err(ArgsError::ConflictingSources);
                    }
                    source = Some(QuizSource::File(PathBuf::from(value)));
                }
                "--quiz-id" => {
                    let value = require_value(args, "--quiz-id")?;
                    if source.is_some() {
                        return Err(ArgsError::ConflictingSources);
                    }
                    let id = value.parse::<QuizId>().map_err(|_| ArgsError::InvalidId {
                        flag: "--quiz-id",
                        raw: value.clone(),
                    })?;
                    source = Some(QuizSource::Remote(id));
                }
                "--seed" => shuffle = parse_seed(require_value(args, "--seed")?)?,
                "--no-shuffle" => shuffle = Shuffle::Disabled,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let source = source.ok_or(ArgsError::MissingFlag {
            flag: "--file or --quiz-id",
        })?;
        Ok(Self { source, shuffle })
    }
}

fn parse_courses(args: &mut impl Iterator<Item = String>) -> Result<CourseQuery, ArgsError> {
    let mut query = CourseQuery::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--search" => query.search = require_value(args, "--search")?,
            "--sort" => {
                let value = require_value(args, "--sort")?;
                query.sort =
                    CourseSort::from_name(&value).ok_or(ArgsError::InvalidSort { raw: value })?;
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(query)
}

#[derive(Debug, PartialEq, Eq)]
struct ChapterArgs {
    course_id: CourseId,
    chapter: u32,
    narrate: bool,
}

impl ChapterArgs {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        accept_narrate: bool,
    ) -> Result<Self, ArgsError> {
        let mut course_id = None;
        let mut chapter = None;
        let mut narrate = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--narrate" if accept_narrate => narrate = true,
                "--course-id" => {
                    let value = require_value(args, "--course-id")?;
                    let id = value.parse::<CourseId>().map_err(|_| ArgsError::InvalidId {
                        flag: "--course-id",
                        raw: value.clone(),
                    })?;
                    course_id = Some(id);
                }
                "--chapter" => {
                    let value = require_value(args, "--chapter")?;
                    let parsed: u32 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidChapter { raw: value.clone() })?;
                    chapter = Some(parsed);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Self {
            course_id: course_id.ok_or(ArgsError::MissingFlag { flag: "--course-id" })?,
            chapter: chapter.ok_or(ArgsError::MissingFlag { flag: "--chapter" })?,
            narrate,
        })
    }
}

fn parse_flashcards(
    args: &mut impl Iterator<Item = String>,
) -> Result<Option<FlashcardSetId>, ArgsError> {
    let mut set_id = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--set-id" => {
                let value = require_value(args, "--set-id")?;
                let id = value
                    .parse::<FlashcardSetId>()
                    .map_err(|_| ArgsError::InvalidId {
                        flag: "--set-id",
                        raw: value.clone(),
                    })?;
                set_id = Some(id);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(set_id)
}

/// Quiz stored on disk for offline practice, in the course service's quiz shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizFile {
    #[serde(default, rename = "_id")]
    id: Option<QuizId>,
    #[serde(default)]
    course_title: String,
    quiz_detail: Vec<QuestionDraft>,
}

fn load_quiz_file(path: &Path) -> Result<QuizContent, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let file: QuizFile = serde_json::from_str(&raw)?;
    let id = file.id.unwrap_or_else(|| {
        let stem = path
            .file_stem()
            .map_or_else(|| "local".into(), |s| s.to_string_lossy());
        QuizId::new(stem)
    });
    Ok(QuizContent {
        id,
        course_title: file.course_title,
        questions: file.quiz_detail,
    })
}

fn remote_gateway() -> Result<HttpCourseGateway, Box<dyn std::error::Error>> {
    Ok(HttpCourseGateway::from_env()?.ok_or(ArgsError::MissingApiUrl)?)
}

fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn print_question(quiz: &ActiveQuiz) -> Result<(), Box<dyn std::error::Error>> {
    let session = quiz.session();
    let question = session.current_question()?;
    let progress = quiz.progress();
    let selected = session
        .answer_for(question.id())
        .map(|a| a.selected_option.as_str());

    println!();
    println!(
        "[{}/{}] {}",
        progress.position + 1,
        progress.total,
        question.prompt()
    );
    for (i, option) in question.options().iter().enumerate() {
        let marker = if selected == Some(option.as_str()) { '*' } else { ' ' };
        println!(" {marker} {}. {option}", i + 1);
    }
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn print_summary(submitted: &SubmittedQuiz) {
    let summary = &submitted.summary;
    println!();
    println!(
        "Score: {}% ({} of {} correct)",
        summary.score_percent(),
        summary.correct_count(),
        summary.total_questions()
    );
    for (i, entry) in summary.transcript().iter().enumerate() {
        if entry.is_correct {
            println!("  {}. {}  [ok] {}", i + 1, entry.prompt, entry.selected_option);
        } else {
            println!(
                "  {}. {}  [wrong] {} (answer: {})",
                i + 1,
                entry.prompt,
                entry.selected_option,
                entry.correct_option
            );
        }
    }
    if let Some(message) = &submitted.receipt.message {
        println!("{message}");
    }
}

async fn run_quiz(args: QuizArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (gateway, quiz_id): (Arc<dyn CourseGateway>, QuizId) = match args.source {
        QuizSource::File(path) => {
            let content = load_quiz_file(&path)?;
            let id = content.id.clone();
            let gateway = InMemoryGateway::new();
            gateway.insert_quiz(content)?;
            (Arc::new(gateway), id)
        }
        QuizSource::Remote(id) => (Arc::new(remote_gateway()?), id),
    };

    let service = QuizLoopService::new(gateway).with_shuffle(args.shuffle);
    let mut quiz = service.start_quiz(&quiz_id).await?;
    if quiz.session().is_empty() {
        println!("Quiz {quiz_id} has no questions.");
        return Ok(());
    }
    if !quiz.course_title().is_empty() {
        println!("{}", quiz.course_title());
    }

    loop {
        print_question(&quiz)?;
        let Some(line) = read_line()? else {
            println!();
            println!("Input closed; nothing was submitted.");
            return Ok(());
        };
        let options = quiz.session().current_question()?.options().to_vec();

        match parse_choice(&line, &options) {
            Choice::Answer(option) => {
                let result = service.answer_current(&mut quiz, &option)?;
                debug!(answered = result.progress.answered, "answer recorded");
                if result.progress.remaining == 0 {
                    break;
                }
                if !service.next(&mut quiz).moved {
                    println!(
                        "{} question(s) still unanswered; use b to go back.",
                        result.progress.remaining
                    );
                }
            }
            Choice::Next => {
                if !service.next(&mut quiz).moved {
                    println!("Already at the last question.");
                }
            }
            Choice::Back => {
                if !service.back(&mut quiz).moved {
                    println!("Already at the first question.");
                }
            }
            Choice::Quit => {
                println!("Quiz abandoned; nothing was submitted.");
                return Ok(());
            }
            Choice::Unrecognized(raw) => println!("Not an option: {raw:?}"),
        }
    }

    let submitted = service.submit(&quiz).await?;
    print_summary(&submitted);
    Ok(())
}

fn badge_label(badge: ProgressBadge) -> &'static str {
    match badge {
        ProgressBadge::Gold => "gold",
        ProgressBadge::Silver => "silver",
        ProgressBadge::Bronze => "bronze",
    }
}

fn print_course(course: &CourseListing) {
    let resume = course
        .resume_chapter()
        .map_or_else(|| "finished".to_string(), |i| format!("next chapter {}", i + 1));
    println!(
        "{:<32} {:>3}% {:<6}  {} / {}  ({resume})  [{}]",
        course.title,
        course.progress.rounded_percent(),
        badge_label(course.progress.badge()),
        course.category,
        course.difficulty,
        course.id
    );
}

async fn run_courses(query: CourseQuery) -> Result<(), Box<dyn std::error::Error>> {
    let service = CourseProgressService::new(Arc::new(remote_gateway()?));
    let courses = service.list_courses(&query).await?;
    if courses.is_empty() {
        println!("No enrolled courses match.");
    }
    for course in &courses {
        print_course(course);
    }
    Ok(())
}

fn print_page(page: &ChapterPage, narrate: bool) {
    if narrate {
        println!("{}", page.narration());
        return;
    }
    println!("== {} ==", page.topic);
    println!("{}", page.explain);
    if !page.code.trim().is_empty() {
        println!();
        for line in page.code.lines() {
            println!("    {line}");
        }
    }
    if !page.example.trim().is_empty() {
        println!();
        println!("Example: {}", page.example);
    }
}

async fn run_chapter(args: ChapterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = CourseProgressService::new(Arc::new(remote_gateway()?));
    let chapter = service.open_chapter(&args.course_id, args.chapter).await?;
    println!("Chapter {}: {}", args.chapter + 1, chapter.name);

    let mut reader = chapter.into_reader();
    if reader.is_empty() {
        println!("This chapter has no pages.");
        return Ok(());
    }

    loop {
        if let Some(page) = reader.current() {
            println!();
            println!(
                "[{}/{}, {:.0}%]",
                reader.index() + 1,
                reader.len(),
                reader.position_percent()
            );
            print_page(page, args.narrate);
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            return Ok(());
        };
        let nav = parse_nav(&line).or_else(|| line.trim().is_empty().then_some(Nav::Next));
        match nav {
            Some(Nav::Next) => {
                if !reader.advance() {
                    let receipt = service
                        .complete_chapter(&args.course_id, args.chapter)
                        .await?;
                    println!(
                        "{}",
                        receipt
                            .message
                            .unwrap_or_else(|| "Chapter completed.".to_string())
                    );
                    return Ok(());
                }
            }
            Some(Nav::Back) => {
                if !reader.go_back() {
                    println!("Already at the first page.");
                }
            }
            Some(Nav::Quit) => return Ok(()),
            None => println!("Use Enter or n, b, q."),
        }
    }
}

async fn run_flashcards(set_id: Option<FlashcardSetId>) -> Result<(), Box<dyn std::error::Error>> {
    let service = FlashcardService::new(Arc::new(remote_gateway()?));
    let Some(set_id) = set_id else {
        let sets = service.list_sets().await?;
        if sets.is_empty() {
            println!("No flashcard sets available.");
        }
        for set in &sets {
            println!("{:<32} {:>3} cards  [{}]", set.course_title, set.cards_count, set.id);
        }
        return Ok(());
    };

    let mut deck = service.open_deck(&set_id).await?;
    let mut flipped = false;
    loop {
        if let Some(card) = deck.current() {
            println!();
            println!(
                "[{}/{}, {:.0}%] {}",
                deck.index() + 1,
                deck.len(),
                deck.position_percent(),
                card.front
            );
            if flipped {
                println!("    {}", card.back);
            }
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            return Ok(());
        };
        match parse_nav(&line) {
            Some(Nav::Next) => {
                if !deck.advance() {
                    println!("End of deck.");
                    return Ok(());
                }
                flipped = false;
            }
            Some(Nav::Back) => {
                if deck.go_back() {
                    flipped = false;
                } else {
                    println!("Already at the first card.");
                }
            }
            Some(Nav::Quit) => return Ok(()),
            None => flipped = !flipped,
        }
    }
}

async fn run_complete(args: ChapterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = CourseProgressService::new(Arc::new(remote_gateway()?));
    let receipt = service
        .complete_chapter(&args.course_id, args.chapter)
        .await?;
    println!(
        "{}",
        receipt
            .message
            .unwrap_or_else(|| format!("Chapter {} completed.", args.chapter + 1))
    );
    if let Some(next) = service.resume_chapter(&args.course_id).await? {
        println!("Continue with chapter {}.", next + 1);
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);

    let cmd = match argv.next() {
        None => {
            print_usage();
            return Err(ArgsError::MissingFlag { flag: "a subcommand" }.into());
        }
        Some(first) if first == "--help" || first == "-h" => {
            print_usage();
            return Ok(());
        }
        Some(first) => Command::from_arg(&first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    let rest: Vec<String> = argv.collect();
    if rest.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    let mut iter = rest.into_iter();

    let parsed = match cmd {
        Command::Quiz => {
            QuizArgs::parse(&mut iter, std::env::var("LEARN_QUIZ_SEED").ok()).map(Parsed::Quiz)
        }
        Command::Courses => parse_courses(&mut iter).map(Parsed::Courses),
        Command::Chapter => ChapterArgs::parse(&mut iter, true).map(Parsed::Chapter),
        Command::Complete => ChapterArgs::parse(&mut iter, false).map(Parsed::Complete),
        Command::Flashcards => parse_flashcards(&mut iter).map(Parsed::Flashcards),
    }
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    init_tracing();

    match parsed {
        Parsed::Quiz(args) => run_quiz(args).await,
        Parsed::Courses(query) => run_courses(query).await,
        Parsed::Chapter(args) => run_chapter(args).await,
        Parsed::Complete(args) => run_complete(args).await,
        Parsed::Flashcards(set_id) => run_flashcards(set_id).await,
    }
}

enum Parsed {
    Quiz(QuizArgs),
    Courses(CourseQuery),
    Chapter(ChapterArgs),
    Complete(ChapterArgs),
    Flashcards(Option<FlashcardSetId>),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> std::vec::IntoIter<String> {
        list.iter()
            .map(|s| (*s).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn quiz_args_from_file_with_seed() {
        let parsed = QuizArgs::parse(&mut args(&["--file", "q.json", "--seed", "7"]), None).unwrap();
        assert_eq!(parsed.source, QuizSource::File(PathBuf::from("q.json")));
        assert_eq!(parsed.shuffle, Shuffle::Seeded(7));
    }

    #[test]
    fn env_seed_is_overridden_by_flags() {
        let parsed =
            QuizArgs::parse(&mut args(&["--quiz-id", "abc", "--no-shuffle"]), Some("3".into()))
                .unwrap();
        assert_eq!(parsed.source, QuizSource::Remote(QuizId::new("abc")));
        assert_eq!(parsed.shuffle, Shuffle::Disabled);

        let parsed = QuizArgs::parse(&mut args(&["--quiz-id", "abc"]), Some("3".into())).unwrap();
        assert_eq!(parsed.shuffle, Shuffle::Seeded(3));
    }

    #[test]
    fn quiz_args_need_exactly_one_source() {
        let err = QuizArgs::parse(&mut args(&["--seed", "1"]), None).unwrap_err();
        assert!(matches!(err, ArgsError::MissingFlag { .. }));

        let err = QuizArgs::parse(&mut args(&["--file", "a", "--quiz-id", "b"]), None).unwrap_err();
        assert!(matches!(err, ArgsError::ConflictingSources));

        let err = QuizArgs::parse(&mut args(&["--quiz-id", "  "]), None).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidId { .. }));
    }

    #[test]
    fn courses_query_flags() {
        let query = parse_courses(&mut args(&["--search", "rust", "--sort", "progress"])).unwrap();
        assert_eq!(query, CourseQuery::new("rust", CourseSort::ProgressDesc));

        let err = parse_courses(&mut args(&["--sort", "random"])).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidSort { .. }));
    }

    #[test]
    fn chapter_args_require_both_flags() {
        let parsed =
            ChapterArgs::parse(&mut args(&["--course-id", "c1", "--chapter", "2"]), false)
                .unwrap();
        assert_eq!(
            parsed,
            ChapterArgs {
                course_id: CourseId::new("c1"),
                chapter: 2,
                narrate: false,
            }
        );

        let err = ChapterArgs::parse(&mut args(&["--chapter", "2"]), false).unwrap_err();
        assert!(matches!(err, ArgsError::MissingFlag { flag: "--course-id" }));

        let err = ChapterArgs::parse(&mut args(&["--course-id", "c1", "--chapter", "-1"]), false)
            .unwrap_err();
        assert!(matches!(err, ArgsError::InvalidChapter { .. }));
    }

    #[test]
    fn narrate_is_only_accepted_when_reading() {
        let list = ["--course-id", "c1", "--chapter", "0", "--narrate"];
        let parsed = ChapterArgs::parse(&mut args(&list), true).unwrap();
        assert!(parsed.narrate);

        let err = ChapterArgs::parse(&mut args(&list), false).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(arg) if arg == "--narrate"));
    }

    #[test]
    fn flashcards_set_id_is_optional() {
        assert_eq!(parse_flashcards(&mut args(&[])).unwrap(), None);
        assert_eq!(
            parse_flashcards(&mut args(&["--set-id", "f1"])).unwrap(),
            Some(FlashcardSetId::new("f1"))
        );
        let err = parse_flashcards(&mut args(&["--set-id", " "])).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidId { flag: "--set-id", .. }));
    }

    fn write_quiz_file(name: &str, body: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("quiz-cli-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        (dir, path)
    }

    #[test]
    fn quiz_file_uses_the_service_quiz_shape() {
        let (dir, path) = write_quiz_file(
            "exported.json",
            r#"{"_id": "64f1", "courseTitle": "Rust", "quizesCount": 1, "quizDetail": [
                {"question": "Who owns a value?", "options": ["one owner", "many"], "correctAns": "one owner"}
            ]}"#,
        );

        let content = load_quiz_file(&path).unwrap();
        assert_eq!(content.id, QuizId::new("64f1"));
        assert_eq!(content.course_title, "Rust");
        assert_eq!(
            content.questions,
            vec![QuestionDraft::new("Who owns a value?", ["one owner", "many"], "one owner")]
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn quiz_file_defaults_id_to_file_stem() {
        let (dir, path) = write_quiz_file(
            "borrowing.json",
            r#"{"quizDetail": [{"question": "?", "options": ["a"], "correctAns": "a"}]}"#,
        );

        let content = load_quiz_file(&path).unwrap();
        assert_eq!(content.id, QuizId::new("borrowing"));
        assert_eq!(content.course_title, "");
        assert_eq!(content.questions.len(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
