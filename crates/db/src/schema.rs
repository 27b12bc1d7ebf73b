use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Weekly availability windows, in minutes of the day
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS disponibilites (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            medecin_id UUID NOT NULL,
            jour VARCHAR(16) NOT NULL,
            debut_minutes INTEGER NOT NULL,
            fin_minutes INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_day CHECK (
                jour IN ('lundi', 'mardi', 'mercredi', 'jeudi', 'vendredi', 'samedi', 'dimanche')
            ),
            CONSTRAINT valid_minute_range CHECK (
                debut_minutes >= 0 AND fin_minutes <= 1440 AND fin_minutes > debut_minutes
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Appointments
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rendez_vous (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            medecin_id UUID NOT NULL,
            patient_id UUID NOT NULL,
            date DATE NOT NULL,
            heure_minutes INTEGER NOT NULL,
            duree INTEGER NOT NULL DEFAULT 30,
            statut VARCHAR(16) NOT NULL DEFAULT 'en_attente',
            motif TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_status CHECK (
                statut IN ('en_attente', 'confirme', 'annule', 'termine')
            ),
            CONSTRAINT valid_duration CHECK (duree > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_disponibilites_medecin_jour ON disponibilites(medecin_id, jour);
        CREATE INDEX IF NOT EXISTS idx_rendez_vous_medecin_date ON rendez_vous(medecin_id, date);
        CREATE INDEX IF NOT EXISTS idx_rendez_vous_patient_id ON rendez_vous(patient_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
