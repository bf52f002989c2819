use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "campuspath")]
#[command(about = "Find walking routes between campus buildings")]
pub struct Args {
    /// Start building (id or name)
    #[arg(required_unless_present = "list_buildings")]
    pub from: Option<String>,

    /// Destination building (id or name)
    #[arg(required_unless_present = "list_buildings")]
    pub to: Option<String>,

    /// Routing algorithm: bfs (fewest stops), dfs (every route), dijkstra (shortest distance)
    #[arg(short, long, default_value = "bfs")]
    pub algorithm: String,

    /// Campus data file
    #[arg(short, long, value_name = "FILE", default_value = "campus-data.json")]
    pub data: String,

    /// Fetch campus data from a running campuspath server instead of a file
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// List the buildings on the map and exit
    #[arg(short, long)]
    pub list_buildings: bool,

    /// Print the stitched route coordinates after the result
    #[arg(short = 'g', long)]
    pub show_geometry: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the route flow
    #[arg(short, long)]
    pub quiet: bool,
}
