//! Ecogestion - operator console for the waste-management knowledge base
//!
//! This is the main entry point for the Ecogestion command-line interface.
//!
//! Usage:
//!   ecogestion ask "Quels producteurs génèrent du plastique ?"
//!   ecogestion producers list --filter Agricole
//!   ecogestion stats producers

use clap::{Args, Parser, Subcommand};
use ecogestion::{
    api::{
        NewCompostCentre, NewSortingCentre, NewSupervisor, ProducerForm, ProducerKind, Registration,
        SupervisorType, SupervisorUpdate,
    },
    config::{ConsoleConfig, DEFAULT_API_URL, DEFAULT_LOG_FILTER, DEFAULT_TIMEOUT_SECS},
    logging,
    views::{
        compost::{render_sorted_wastes, sorted_wastes},
        statistics, CentersView, CompostView, ProducerDetails, ProducerStatistics, ProducersView,
        PropertySheet, QueryView, SupervisorsView, WastesView, FILTER_ALL,
    },
    ConsoleClient, Error, Result,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "ecogestion")]
#[command(about = "Operator console for the Ecogestion waste-management knowledge base")]
struct Cli {
    /// Base URL of the backend
    #[arg(long, global = true, env = "ECOGESTION_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "ECOGESTION_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log filter, e.g. `info` or `ecogestion=debug`
    #[arg(long, global = true, env = "ECOGESTION_LOG", default_value = DEFAULT_LOG_FILTER)]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a question in natural language
    Ask {
        question: String,
        /// Print every column instead of one line per row
        #[arg(long)]
        table: bool,
    },
    /// Run a SPARQL query, inline or from a file
    Sparql {
        query: Option<String>,
        #[arg(short, long, conflicts_with = "query")]
        file: Option<PathBuf>,
        #[arg(long)]
        table: bool,
    },
    /// Producers
    #[command(subcommand)]
    Producers(ProducerCommand),
    /// All registered wastes
    Wastes,
    /// Supervisors
    #[command(subcommand)]
    Supervisors(SupervisorCommand),
    /// Treatment centers
    #[command(subcommand)]
    Centers(CenterCommand),
    /// Sorting and composting centres
    #[command(subcommand)]
    Compost(CompostCommand),
    /// Statistics and charts
    #[command(subcommand)]
    Stats(StatsCommand),
    /// Check credentials
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "ECOGESTION_PASSWORD")]
        password: String,
    },
    /// Create an account
    Register(RegisterArgs),
}

#[derive(Subcommand, Debug)]
enum ProducerCommand {
    /// List producers
    List {
        /// Keep producers whose type contains this text (`all` keeps everything)
        #[arg(long, default_value = FILTER_ALL)]
        filter: String,
        /// Search producers by name
        #[arg(long, conflicts_with = "city")]
        search: Option<String>,
        /// Producers of one city
        #[arg(long)]
        city: Option<String>,
    },
    /// Details of one producer
    Show { uri: String },
    /// Wastes of one producer
    Wastes { uri: String },
    /// Create a producer
    Create(ProducerArgs),
    /// Update a producer
    Update {
        uri: String,
        #[command(flatten)]
        form: ProducerArgs,
    },
    /// Delete a producer
    Delete {
        uri: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct ProducerArgs {
    #[arg(long)]
    id: String,
    #[arg(long)]
    name: String,
    /// industriel, agricole, commercial, hospitalier or residentiel
    #[arg(long = "type")]
    kind: ProducerKind,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    postal_code: String,
}

impl From<ProducerArgs> for ProducerForm {
    fn from(args: ProducerArgs) -> Self {
        ProducerForm {
            id: args.id,
            name: args.name,
            kind: args.kind,
            city: args.city,
            address: args.address,
            postal_code: args.postal_code,
        }
    }
}

#[derive(Subcommand, Debug)]
enum SupervisorCommand {
    /// List supervisors
    List {
        /// Keep supervisors whose type label contains this text
        #[arg(long, default_value = FILTER_ALL)]
        filter: String,
        #[arg(long)]
        search: Option<String>,
    },
    /// Supervisors and centers side by side
    Overview,
    /// Details of one supervisor
    Show { uri: String },
    /// Centers assigned to one supervisor
    Centers { uri: String },
    /// Add a supervisor
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        kind: SupervisorType,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        function: Option<String>,
        #[arg(long)]
        zone: Option<String>,
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        center: Option<String>,
        #[arg(long)]
        inactive: bool,
    },
    /// Update a supervisor; only the given fields change
    Update {
        uri: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        function: Option<String>,
        #[arg(long)]
        zone: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        #[arg(long)]
        center: Option<String>,
    },
    /// Delete a supervisor
    Delete {
        uri: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum CenterCommand {
    /// List centers
    List {
        #[arg(long, default_value = FILTER_ALL)]
        filter: String,
        #[arg(long)]
        search: Option<String>,
    },
    /// Details of one center
    Show { uri: String },
    /// Wastes handled by one center
    Wastes { uri: String },
}

#[derive(Subcommand, Debug)]
enum CompostCommand {
    /// Both centre lists
    Overview,
    /// Sorting centres
    Tri,
    /// Composting centres
    Compostage,
    /// Wastes routed to a centre
    Wastes {
        /// Centre name
        centre: String,
        /// Show compostable wastes instead of sorted ones
        #[arg(long)]
        compostable: bool,
    },
    /// Add a sorting centre
    AddTri {
        #[command(flatten)]
        centre: CentreArgs,
        #[arg(long)]
        debit_tri: f64,
        #[arg(long)]
        taux_purete: f64,
    },
    /// Add a composting centre
    AddCompostage {
        #[command(flatten)]
        centre: CentreArgs,
        #[arg(long)]
        temperature: f64,
        /// Composting time in days
        #[arg(long)]
        temps_compostage: u32,
    },
}

#[derive(Args, Debug)]
struct CentreArgs {
    #[arg(long)]
    id: String,
    #[arg(long)]
    type_centre: String,
    #[arg(long)]
    nom: String,
    #[arg(long, default_value = "")]
    localisation: String,
    #[arg(long, default_value_t = 0.0)]
    capacite: f64,
    /// Register the centre as out of service
    #[arg(long)]
    inactive: bool,
}

#[derive(Subcommand, Debug)]
enum StatsCommand {
    Producers,
    Supervisors,
    Centers,
    Tri,
    Compostage,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long, env = "ECOGESTION_PASSWORD")]
    password: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    role: String,
    #[arg(long)]
    sous_role: Option<String>,
    #[arg(long, default_value = "")]
    nom: String,
    #[arg(long, default_value = "")]
    adresse: String,
    #[arg(long, default_value = "")]
    ville: String,
    #[arg(long, default_value = "")]
    code_postal: String,
}

fn confirm(yes: bool) -> Result<()> {
    if yes {
        Ok(())
    } else {
        Err(Error::validation("Suppression non confirmée: relancez avec --yes"))
    }
}

fn print_query(results: &ecogestion::sparql::SparqlResults, table: bool) {
    let view = QueryView::from_results(results);
    if table {
        print!("{}", view.render_table());
    } else {
        print!("{}", view.render());
    }
}

async fn run_producers(client: &ConsoleClient, command: ProducerCommand) -> Result<()> {
    match command {
        ProducerCommand::List { filter, search, city } => {
            let results = match (search, city) {
                (Some(term), _) => client.search_producers(&term).await?,
                (None, Some(city)) => client.producers_by_city(&city).await?,
                (None, None) => client.producers().await?,
            };
            print!("{}", ProducersView::from_results(&results).with_filter(filter).render());
        }
        ProducerCommand::Show { uri } => {
            let results = client.producer_details(&uri).await?;
            print!("{}", ProducerDetails::from_results(&results).render());
        }
        ProducerCommand::Wastes { uri } => {
            let results = client.producer_wastes(&uri).await?;
            print!("{}", WastesView::from_results(&results).render());
        }
        ProducerCommand::Create(args) => {
            println!("{}", client.create_producer(&args.into()).await?);
        }
        ProducerCommand::Update { uri, form } => {
            println!("{}", client.update_producer(&uri, &form.into()).await?);
        }
        ProducerCommand::Delete { uri, yes } => {
            confirm(yes)?;
            println!("{}", client.delete_producer(&uri).await?);
        }
    }
    Ok(())
}

async fn run_supervisors(client: &ConsoleClient, command: SupervisorCommand) -> Result<()> {
    match command {
        SupervisorCommand::List { filter, search } => {
            let results = match search {
                Some(term) => client.search_supervisors(&term).await?,
                None => client.supervisors().await?,
            };
            print!("{}", SupervisorsView::from_results(&results).with_filter(filter).render());
        }
        SupervisorCommand::Overview => {
            let (supervisors, centers) = client.supervision_overview().await?;
            println!("Superviseurs");
            print!("{}", SupervisorsView::from_results(&supervisors).render());
            println!();
            println!("Centres");
            print!("{}", CentersView::from_results(&centers).render());
        }
        SupervisorCommand::Show { uri } => {
            let results = client.supervisor_details(&uri).await?;
            print!("{}", PropertySheet::from_results(&results).render());
        }
        SupervisorCommand::Centers { uri } => {
            let results = client.supervisor_centers(&uri).await?;
            print!("{}", CentersView::from_results(&results).render());
        }
        SupervisorCommand::Add { name, kind, email, phone, function, zone, id, center, inactive } => {
            let supervisor = NewSupervisor {
                email,
                telephone: phone,
                fonction: function,
                zone_affectation: zone,
                actif: !inactive,
                id_superviseur: id,
                center_uri: center,
                ..NewSupervisor::new(name, kind)
            };
            println!("{}", client.add_supervisor(&supervisor).await?);
        }
        SupervisorCommand::Update { uri, name, email, phone, function, zone, active, center } => {
            let update = SupervisorUpdate {
                supervisor_uri: uri,
                nom_complet: name,
                email,
                telephone: phone,
                fonction: function,
                zone_affectation: zone,
                actif: active,
                center_uri: center,
            };
            println!("{}", client.update_supervisor(&update).await?);
        }
        SupervisorCommand::Delete { uri, yes } => {
            confirm(yes)?;
            println!("{}", client.delete_supervisor(&uri).await?);
        }
    }
    Ok(())
}

async fn run_centers(client: &ConsoleClient, command: CenterCommand) -> Result<()> {
    match command {
        CenterCommand::List { filter, search } => {
            let results = match search {
                Some(term) => client.search_centers(&term).await?,
                None => client.centers().await?,
            };
            print!("{}", CentersView::from_results(&results).with_filter(filter).render());
        }
        CenterCommand::Show { uri } => {
            let results = client.center_details(&uri).await?;
            print!("{}", PropertySheet::from_results(&results).render());
        }
        CenterCommand::Wastes { uri } => {
            let results = client.center_wastes(&uri).await?;
            print!("{}", WastesView::from_results(&results).render());
        }
    }
    Ok(())
}

async fn run_compost(client: &ConsoleClient, command: CompostCommand) -> Result<()> {
    match command {
        CompostCommand::Overview => {
            let (sorting, compost) = client.compost_overview().await?;
            print!("{}", CompostView::new(&sorting, &compost).render());
        }
        CompostCommand::Tri => {
            let sorting = client.sorting_centres().await?;
            let view = CompostView::new(&sorting, &Default::default());
            print!("{}", view.render_sorting());
        }
        CompostCommand::Compostage => {
            let compost = client.compost_centres().await?;
            let view = CompostView::new(&Default::default(), &compost);
            print!("{}", view.render_compost());
        }
        CompostCommand::Wastes { centre, compostable } => {
            let results = if compostable {
                client.compostable_wastes(&centre).await?
            } else {
                client.sorted_wastes(&centre).await?
            };
            print!("{}", render_sorted_wastes(&centre, &sorted_wastes(&results)));
        }
        CompostCommand::AddTri { centre, debit_tri, taux_purete } => {
            let new = NewSortingCentre {
                id: centre.id,
                type_centre: centre.type_centre,
                nom: centre.nom,
                localisation: centre.localisation,
                capacite: centre.capacite,
                debit_tri,
                taux_purete,
                statut: !centre.inactive,
            };
            println!("{}", client.add_sorting_centre(&new).await?);
        }
        CompostCommand::AddCompostage { centre, temperature, temps_compostage } => {
            let new = NewCompostCentre {
                id: centre.id,
                type_centre: centre.type_centre,
                nom: centre.nom,
                localisation: centre.localisation,
                capacite: centre.capacite,
                temperature,
                temps_compostage,
                statut: !centre.inactive,
            };
            println!("{}", client.add_compost_centre(&new).await?);
        }
    }
    Ok(())
}

async fn run_stats(client: &ConsoleClient, command: StatsCommand) -> Result<()> {
    let text = match command {
        StatsCommand::Producers => {
            ProducerStatistics::from_results(&client.producer_statistics().await?).render()
        }
        StatsCommand::Supervisors => {
            statistics::supervisor_statistics(&client.supervisor_statistics().await?).chart().to_string()
        }
        StatsCommand::Centers => {
            statistics::center_statistics(&client.center_statistics().await?).chart().to_string()
        }
        StatsCommand::Tri => {
            statistics::sorting_statistics(&client.sorting_statistics().await?).chart().to_string()
        }
        StatsCommand::Compostage => {
            statistics::compost_statistics(&client.compost_statistics().await?).chart().to_string()
        }
    };
    print!("{}", text);
    Ok(())
}

async fn run(client: &ConsoleClient, command: Command) -> Result<()> {
    match command {
        Command::Ask { question, table } => {
            let results = client.ask(&question).await?;
            print_query(&results, table);
        }
        Command::Sparql { query, file, table } => {
            let sparql = match (query, file) {
                (Some(query), _) => query,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => return Err(Error::validation("SPARQL query is required")),
            };
            let results = client.run_sparql(&sparql).await?;
            print_query(&results, table);
        }
        Command::Producers(command) => run_producers(client, command).await?,
        Command::Wastes => {
            print!("{}", WastesView::from_results(&client.wastes().await?).render());
        }
        Command::Supervisors(command) => run_supervisors(client, command).await?,
        Command::Centers(command) => run_centers(client, command).await?,
        Command::Compost(command) => run_compost(client, command).await?,
        Command::Stats(command) => run_stats(client, command).await?,
        Command::Login { username, password } => {
            let user = client.login(&username, &password).await?;
            println!("Connecté: {}", user.nom.as_deref().unwrap_or(&username));
            println!("  URI: {}", user.uri);
            match &user.sous_role {
                Some(sous_role) => println!("  Rôle: {} ({})", user.role, sous_role),
                None => println!("  Rôle: {}", user.role),
            }
            if let Some(email) = &user.email {
                println!("  Email: {}", email);
            }
        }
        Command::Register(args) => {
            let registration = Registration {
                username: args.username,
                password: args.password,
                email: args.email,
                role: args.role,
                sous_role: args.sous_role,
                nom: args.nom,
                adresse: args.adresse,
                ville: args.ville,
                code_postal: args.code_postal,
            };
            let user_id = client.register(&registration).await?;
            println!("Compte créé: {}", user_id);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log);

    let config = ConsoleConfig { api_url: cli.api_url, timeout_secs: cli.timeout_secs, log_filter: cli.log };
    let outcome = match ConsoleClient::new(config) {
        Ok(client) => run(&client, cli.command).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "command failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
