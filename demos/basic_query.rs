//! Basic QueryHaus usage
//!
//! Builds a handful of queries against a stand-in executor that prints what it
//! receives instead of talking to a database.

use queryhaus::prelude::*;

struct PrintingExecutor;

#[async_trait]
impl QueryExecutor for PrintingExecutor {
    type Output = Value;
    type Error = std::io::Error;

    async fn run_query(&self, query: &str) -> Result<Value, std::io::Error> {
        println!("-> {}", query);
        Ok(json!({ "results": [] }))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let queryhaus = QueryHaus::new(PrintingExecutor, QueryConfig::default())?;

    // Raw rows for one host over a fixed window
    queryhaus
        .metric("load")
        .set_time_range(1_700_000_000, 1_700_003_600)
        .where_eq("host", "serverA")
        .limit(10)
        .execute()
        .await?;

    // Bucketed 95th percentile latency, optionally filtered by region
    let region: Option<&str> = Some("eu-west");
    queryhaus
        .metric("requests")
        .with_retention_policy("30d")
        .percentile_default("latency")
        .when(region.is_some(), |q| {
            q.where_eq("region", region.unwrap_or_default())
        })
        .group_by_time("5m")
        .order_by("time", SortOrder::Desc)
        .execute()
        .await?;

    // Missing metric is caught before anything is sent
    match queryhaus.query().count("value").execute().await {
        Err(ExecuteError::Query(err)) => println!("rejected: {}", err),
        other => println!("unexpected: {:?}", other.is_ok()),
    }

    Ok(())
}
