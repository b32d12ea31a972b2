diesel::table! {
    clients (client_id) {
        client_id -> Integer,
        name -> Text,
        surname -> Text,
        address -> Text,
        phone -> Text,
        email -> Text,
    }
}

diesel::table! {
    pets (pet_id) {
        pet_id -> Integer,
        name -> Text,
        species -> Text,
        breed -> Text,
        birth_date -> Date,
        client_id -> Integer,
    }
}

diesel::table! {
    veterinarians (vet_id) {
        vet_id -> Integer,
        name -> Text,
        surname -> Text,
        specialty -> Text,
        phone -> Text,
        email -> Text,
    }
}

diesel::table! {
    appointments (appointment_id) {
        appointment_id -> Integer,
        date -> Date,
        time -> Time,
        pet_id -> Integer,
        vet_id -> Integer,
        description -> Text,
    }
}

diesel::table! {
    appointment_audit (audit_id) {
        audit_id -> Integer,
        appointment_id -> Integer,
        date -> Date,
        time -> Time,
        pet_id -> Integer,
        vet_id -> Integer,
        description -> Text,
        recorded_at -> Timestamp,
    }
}

diesel::table! {
    products (product_id) {
        product_id -> Integer,
        name -> Text,
        description -> Text,
        unit_price -> Text,
    }
}

diesel::table! {
    sales (sale_id) {
        sale_id -> Integer,
        date -> Date,
        client_id -> Integer,
        total -> Text,
    }
}

diesel::table! {
    sale_lines (sale_id, product_id) {
        sale_id -> Integer,
        product_id -> Integer,
        quantity -> Integer,
        unit_price -> Text,
    }
}

diesel::table! {
    treatments (treatment_id) {
        treatment_id -> Integer,
        name -> Text,
        description -> Text,
    }
}

diesel::table! {
    appointment_treatments (appointment_id, treatment_id) {
        appointment_id -> Integer,
        treatment_id -> Integer,
        dosage -> Text,
        duration -> Integer,
    }
}

diesel::joinable!(pets -> clients (client_id));
diesel::joinable!(appointments -> pets (pet_id));
diesel::joinable!(appointments -> veterinarians (vet_id));
diesel::joinable!(sales -> clients (client_id));
diesel::joinable!(sale_lines -> sales (sale_id));
diesel::joinable!(sale_lines -> products (product_id));
diesel::joinable!(appointment_treatments -> appointments (appointment_id));
diesel::joinable!(appointment_treatments -> treatments (treatment_id));

diesel::allow_tables_to_appear_in_same_query!(
    appointment_audit,
    appointment_treatments,
    appointments,
    clients,
    pets,
    products,
    sale_lines,
    sales,
    treatments,
    veterinarians,
);
