use steam_inventory_aggregator::{InventoryAggregator, SteamID};
use steam_inventory_aggregator::enums::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let steamid = get_steamid("STEAMID");
    let aggregator = InventoryAggregator::builder(steamid)
        .partition(App::TF2.appid(), 2)
        .partition(App::CSGO.appid(), 2)
        .start()?;
    let mut loaded = aggregator.subscribe();
    
    tokio::spawn(async move {
        if loaded.wait_for(|loaded| *loaded).await.is_ok() {
            println!("All inventories loaded");
        }
    });
    
    for (appid, contexts) in aggregator.inventories().await {
        for (contextid, inventory) in contexts {
            println!("{appid}:{contextid} has {} items", inventory.len());
            
            if let Some(item) = inventory.items.first() {
                if let Some(description) = inventory.find_description(item) {
                    println!("First item: {}", description.name());
                }
            }
        }
    }
    
    Ok(())
}

fn get_steamid(key: &str) -> SteamID {
    dotenv::dotenv().ok();
    
    let sid_str = std::env::var(key)
        .unwrap_or_else(|_| panic!("{key} missing"));
    
    SteamID::from(sid_str.parse::<u64>().unwrap())
}
