pub mod lambda_envelope;
