//! Persistence properties exercised through the public store traits against
//! a file-backed database.

use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal_macros::dec;
use tempfile::TempDir;

use vetclinic::adapter::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use vetclinic::adapter::sqlite::{
    SqliteAppointmentStore, SqliteClientStore, SqlitePetStore, SqliteProductStore,
    SqliteSaleStore, SqliteVetStore,
};
use vetclinic::domain::appointment::NewAppointment;
use vetclinic::domain::client::NewClient;
use vetclinic::domain::pet::NewPet;
use vetclinic::domain::sale::{NewSale, SaleLine};
use vetclinic::domain::vet::NewVeterinarian;
use vetclinic::domain::product::NewProduct;
use vetclinic::port::store::{
    AppointmentStore, ClientStore, PetStore, ProductStore, SaleStore, VetStore,
};

fn setup_db() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("clinic.db");
    let pool = create_pool(db_path.to_str().unwrap()).expect("create pool");
    run_migrations(&pool).expect("run migrations");
    (dir, pool)
}

fn ana() -> NewClient {
    NewClient {
        name: "Ana".into(),
        surname: "Reyes".into(),
        address: "12 Calle Mayor".into(),
        phone: "555-0101".into(),
        email: "ana@example.com".into(),
    }
}

#[test]
fn created_client_appears_exactly_once_with_assigned_key() {
    let (_dir, pool) = setup_db();
    let store = SqliteClientStore::new(pool);

    let created = store.create(&ana()).unwrap();

    let all = store.list().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Ana");
    assert_eq!(all[0].email, "ana@example.com");
    assert!(created.id.value() > 0);
    assert_eq!(all[0].id, created.id);
}

#[test]
fn delete_by_unique_email_removes_only_that_client() {
    let (_dir, pool) = setup_db();
    let store = SqliteClientStore::new(pool);

    store.create(&ana()).unwrap();
    store
        .create(&NewClient {
            email: "luis@example.com".into(),
            ..ana()
        })
        .unwrap();

    assert!(store.delete_by_email("ana@example.com").unwrap());

    let remaining = store.list().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].email, "luis@example.com");
}

#[test]
fn duplicate_sale_line_pair_is_rejected() {
    let (_dir, pool) = setup_db();

    let client = SqliteClientStore::new(pool.clone()).create(&ana()).unwrap();
    let product = SqliteProductStore::new(pool.clone())
        .create(&NewProduct {
            name: "Flea shampoo".into(),
            description: "250ml bottle".into(),
            unit_price: dec!(12.99),
        })
        .unwrap();

    let sales = SqliteSaleStore::new(pool);
    let sale = sales
        .create(&NewSale {
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            client_id: client.id,
            total: dec!(25.98),
        })
        .unwrap();

    let line = SaleLine {
        sale_id: sale.id,
        product_id: product.id,
        quantity: 2,
        unit_price: dec!(12.99),
    };
    sales.add_line(&line).unwrap();
    assert!(sales.add_line(&line).is_err());
    assert_eq!(sales.list_lines().unwrap().len(), 1);
}

#[test]
fn listing_empty_tables_returns_empty_sequences() {
    let (_dir, pool) = setup_db();

    assert!(SqliteClientStore::new(pool.clone()).list().unwrap().is_empty());
    assert!(SqlitePetStore::new(pool.clone()).list().unwrap().is_empty());
    assert!(SqliteVetStore::new(pool.clone()).list().unwrap().is_empty());
    assert!(SqliteSaleStore::new(pool.clone()).list().unwrap().is_empty());
    assert!(SqliteAppointmentStore::new(pool).list_audit().unwrap().is_empty());
}

#[test]
fn audit_timestamp_is_assigned_at_insertion() {
    let (_dir, pool) = setup_db();

    let client = SqliteClientStore::new(pool.clone()).create(&ana()).unwrap();
    let pet = SqlitePetStore::new(pool.clone())
        .create(&NewPet {
            name: "Bobby".into(),
            species: "dog".into(),
            breed: "beagle".into(),
            birth_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            client_id: client.id,
        })
        .unwrap();
    let vet = SqliteVetStore::new(pool.clone())
        .create(&NewVeterinarian {
            name: "Marta".into(),
            surname: "Gil".into(),
            specialty: "surgery".into(),
            phone: "555-0202".into(),
            email: "marta@clinic.example".into(),
        })
        .unwrap();

    let appointments = SqliteAppointmentStore::new(pool);

    // an appointment far in the past; the audit stamp must not follow it
    let booked = appointments
        .create(&NewAppointment {
            date: NaiveDate::from_ymd_opt(1999, 1, 1).unwrap(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            pet_id: pet.id,
            vet_id: vet.id,
            description: "vaccination".into(),
        })
        .unwrap();

    let audit = appointments.list_audit().unwrap();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].appointment_id, booked.id);
    assert_eq!(audit[0].date, booked.date);

    let age = Utc::now().naive_utc() - audit[0].recorded_at;
    assert!(age.num_seconds() < 60, "recorded_at should be fresh");
    assert_ne!(audit[0].recorded_at.date(), booked.date);
}
