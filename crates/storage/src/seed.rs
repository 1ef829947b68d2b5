//! Seed data for local development and tests.
//!
//! [`SeedFactory`] builds entities with sensible defaults, sequential ids
//! (`cust_1`, `proj_3`, ...) drawn from a single counter, and creation
//! timestamps one minute apart, so the seeded order is deterministic.

use chrono::{DateTime, Duration, Utc};

use portfolio_core::models::{
    Customer, EnergyAsset, EnergyAssetType, Project, ProjectStatus,
};

/// 2024-01-01T00:00:00Z.
const SEED_EPOCH_SECS: i64 = 1_704_067_200;

/// Entities produced by [`seed_data`].
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub customers: Vec<Customer>,
    pub projects: Vec<Project>,
    pub energy_assets: Vec<EnergyAsset>,
}

/// Builder for domain entities with default field values.
#[derive(Debug, Clone)]
pub struct SeedFactory {
    next_id: u64,
    clock: DateTime<Utc>,
}

impl Default for SeedFactory {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(SEED_EPOCH_SECS))
    }
}

impl SeedFactory {
    /// Start a factory whose first entity is created at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            next_id: 1,
            clock: start,
        }
    }

    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}_{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn tick(&mut self) -> DateTime<Utc> {
        let now = self.clock;
        self.clock += Duration::minutes(1);
        now
    }

    pub fn customer(&mut self, name: &str) -> Customer {
        let id = self.next_id("cust");
        let now = self.tick();
        Customer {
            id,
            name: name.to_string(),
            contact_name: "Alex Manager".to_string(),
            contact_email: "ops@example.com".to_string(),
            country: "DE".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn project(&mut self, customer_id: &str, name: &str, status: ProjectStatus) -> Project {
        let id = self.next_id("proj");
        let now = self.tick();
        Project {
            id,
            customer_id: customer_id.to_string(),
            name: name.to_string(),
            status,
            total_capacity_kw: 0.0,
            city: "Berlin".to_string(),
            country: "DE".to_string(),
            start_date: now,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn energy_asset(
        &mut self,
        project_id: &str,
        asset_type: EnergyAssetType,
        capacity_kw: f64,
        active: bool,
    ) -> EnergyAsset {
        let id = self.next_id("asset");
        let now = self.tick();
        let (name, manufacturer, model) = match asset_type {
            EnergyAssetType::Solar => ("PV Inverter", "GenericCo", "Model-X"),
            EnergyAssetType::Wind => ("Wind Turbine", "GenericCo", "WT-3"),
            EnergyAssetType::Storage => ("Battery Rack", "GenericCo", "BR-500"),
            EnergyAssetType::Other => ("Auxiliary Unit", "GenericCo", "AUX-1"),
        };
        EnergyAsset {
            id,
            project_id: project_id.to_string(),
            asset_type,
            name: name.to_string(),
            capacity_kw,
            active,
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            commissioned_at: active.then_some(now),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The standard seed set: two customers, three projects, four assets.
///
/// Northwind owns "Rooftop Solar Phase 1" (ACTIVE, two SOLAR assets) and
/// "Industrial Storage Pilot" (DRAFT, one STORAGE asset); Brightfield owns
/// "Onshore Wind Extension" (HOLD, one WIND asset).
pub fn seed_data() -> SeedData {
    let mut f = SeedFactory::default();

    let northwind = f.customer("Northwind Energy GmbH");
    let brightfield = f.customer("Brightfield Power Ltd");

    let mut rooftop = f.project(&northwind.id, "Rooftop Solar Phase 1", ProjectStatus::Active);
    let mut storage = f.project(
        &northwind.id,
        "Industrial Storage Pilot",
        ProjectStatus::Draft,
    );
    let mut wind = f.project(
        &brightfield.id,
        "Onshore Wind Extension",
        ProjectStatus::Hold,
    );

    let energy_assets = vec![
        f.energy_asset(&rooftop.id, EnergyAssetType::Solar, 250.0, true),
        f.energy_asset(&rooftop.id, EnergyAssetType::Solar, 180.0, true),
        f.energy_asset(&storage.id, EnergyAssetType::Storage, 500.0, false),
        f.energy_asset(&wind.id, EnergyAssetType::Wind, 1500.0, false),
    ];

    for project in [&mut rooftop, &mut storage, &mut wind] {
        project.total_capacity_kw = energy_assets
            .iter()
            .filter(|a| a.project_id == project.id)
            .map(|a| a.capacity_kw)
            .sum();
    }

    SeedData {
        customers: vec![northwind, brightfield],
        projects: vec![rooftop, storage, wind],
        energy_assets,
    }
}
