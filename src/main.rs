use chatter_box::app::{interactive::Interactive, shell};
use chatter_box::core::session::CategoryChange;
use chatter_box::utils::{logger, validation::Validate};
use chatter_box::{source_from_config, CliConfig, Session, TopicError, TopicLoader};
use clap::Parser;
use serde::Serialize;
use tokio::io::BufReader;

#[derive(Serialize)]
struct Draw<'a> {
    category: &'a str,
    id: &'a chatter_box::TopicId,
    topic: &'a str,
}

fn exit_with(error: &TopicError) -> ! {
    tracing::error!("❌ {}", error);
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(error.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = cli.validate() {
        exit_with(&e);
    }
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let source = match source_from_config(&settings) {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };
    let loader = TopicLoader::new(source);

    let mut session = Session::new();
    if cli.interactive {
        print!("{}", shell::render(&session));
    }

    let result = loader.load().await;
    let exit_code = result.as_ref().err().map(TopicError::exit_code);
    session.finish_loading(result);

    if let Some(code) = exit_code {
        eprint!("{}", shell::render(&session));
        std::process::exit(code);
    }

    let Some(set) = session.topics() else {
        return Ok(());
    };

    if cli.list {
        print!("{}", shell::render_category_list(set));
        return Ok(());
    }

    let category = settings.default_category.clone();
    if let Some(name) = &category {
        if session.select_category(name) == CategoryChange::Unknown {
            tracing::warn!("⚠️ Category '{}' not found", name);
        }
    }

    if cli.interactive {
        let mut app = Interactive::new(session, rand::rng(), settings.reveal_delay);
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        app.run(stdin, &mut stdout).await?;
        return Ok(());
    }

    let Some(name) = category else {
        print!("{}", shell::render(&session));
        eprintln!("💡 Pass --category <name> or --interactive to draw a topic");
        return Ok(());
    };

    let mut rng = rand::rng();
    let mut draws = Vec::with_capacity(cli.count);
    for _ in 0..cli.count {
        match session.generate(&mut rng) {
            Some(topic) => draws.push(topic.clone()),
            None => break,
        }
    }

    if draws.is_empty() {
        eprintln!("No topic available for category '{}'", name);
        return Ok(());
    }

    if cli.json {
        let out: Vec<Draw> = draws
            .iter()
            .map(|t| Draw {
                category: &name,
                id: &t.id,
                topic: &t.topic,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for topic in &draws {
            print!("{}", shell::render_topic(topic, &name));
        }
    }

    Ok(())
}
