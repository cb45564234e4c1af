pub fn validate_credentials(correo: &str, contrasena: &str) -> Result<(), String> {
    if correo.trim().is_empty() {
        return Err("Ingrese su correo electrónico".into());
    }
    if contrasena.is_empty() {
        return Err("Ingrese su contraseña".into());
    }
    Ok(())
}
