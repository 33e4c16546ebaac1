mod common; // Declare the common module

use assert_cmd::prelude::*;
use common::buscador_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn read_json_report(workdir: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(workdir.path().join("resultados_busqueda.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_basic_run_produces_both_outputs() -> Result<(), Box<dyn std::error::Error>> {
    let corpus = tempdir()?;
    fs::write(corpus.path().join("a.txt"), "Un Ejemplo y otro Ejemplo")?;
    fs::write(corpus.path().join("b.txt"), "sin menciones")?;
    let workdir = tempdir()?;

    buscador_cmd()
        .current_dir(workdir.path())
        .arg(corpus.path().to_str().unwrap())
        .args(["-k", "Ejemplo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encontrados 2 archivos TXT"))
        .stdout(predicate::str::contains("Procesando 1/2"))
        .stdout(predicate::str::contains("ANÁLISIS COMPLETADO"));

    assert!(workdir.path().join("resultados_busqueda.json").exists());
    assert!(workdir.path().join("resultados_busqueda.html").exists());

    let report = read_json_report(&workdir);
    assert_eq!(report["metadata"]["total_archivos"], 2);
    assert_eq!(report["metadata"]["palabra_buscada"], "Ejemplo");
    assert_eq!(report["resumen_general"]["total_menciones"], 2);
    assert_eq!(report["resumen_general"]["archivos_con_palabra"], 1);
    assert_eq!(report["resumen_general"]["archivos_sin_palabra"], 1);

    corpus.close()?;
    workdir.close()?;
    Ok(())
}

#[test]
fn test_whole_word_counting_excludes_plural() -> Result<(), Box<dyn std::error::Error>> {
    let corpus = tempdir()?;
    fs::write(
        corpus.path().join("a.txt"),
        "Ejemplo una vez, Ejemplo dos veces, pero Ejemplos no cuenta",
    )?;
    let workdir = tempdir()?;

    buscador_cmd()
        .current_dir(workdir.path())
        .arg(corpus.path().to_str().unwrap())
        .args(["-k", "Ejemplo"])
        .assert()
        .success();

    let report = read_json_report(&workdir);
    assert_eq!(report["resumen_general"]["total_menciones"], 2);
    assert_eq!(report["archivos"][0]["total_menciones"], 2);
    assert_eq!(report["archivos"][0]["tiene_palabra_clave"], true);

    corpus.close()?;
    workdir.close()?;
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_excluded_and_run_continues() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let corpus = tempdir()?;
    fs::write(
        corpus.path().join("a.txt"),
        "Un Ejemplo y otro Ejemplo pero no Ejemplos",
    )?;
    fs::write(corpus.path().join("b.txt"), "sin menciones")?;
    let unreadable = corpus.path().join("c.txt");
    fs::write(&unreadable, "Ejemplo inaccesible")?;
    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o000))?;
    if fs::read(&unreadable).is_ok() {
        // Permission bits are not enforced for this user (e.g. root), so the
        // unreadable-file scenario cannot be simulated here.
        return Ok(());
    }
    let workdir = tempdir()?;

    buscador_cmd()
        .current_dir(workdir.path())
        .arg(corpus.path().to_str().unwrap())
        .args(["-k", "Ejemplo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("c.txt"));

    let report = read_json_report(&workdir);
    assert_eq!(report["metadata"]["total_archivos"], 2);
    assert_eq!(report["resumen_general"]["total_menciones"], 2);
    assert_eq!(report["resumen_general"]["archivos_con_palabra"], 1);
    assert_eq!(report["resumen_general"]["archivos_sin_palabra"], 1);
    assert_eq!(report["resumen_general"]["porcentaje_con_palabra"], 50.0);
    assert_eq!(report["resumen_general"]["porcentaje_sin_palabra"], 50.0);

    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o644))?;
    corpus.close()?;
    workdir.close()?;
    Ok(())
}

#[test]
fn test_single_file_frequency_per_million() -> Result<(), Box<dyn std::error::Error>> {
    let corpus = tempdir()?;
    // Exactly one mention among 10 words: 1/10 * 1e6 = 100000.0.
    fs::write(
        corpus.path().join("a.txt"),
        "uno dos tres cuatro cinco seis siete ocho nueve Ejemplo",
    )?;
    let workdir = tempdir()?;

    buscador_cmd()
        .current_dir(workdir.path())
        .arg(corpus.path().to_str().unwrap())
        .args(["-k", "Ejemplo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100000.0"));

    let report = read_json_report(&workdir);
    assert_eq!(report["metadata"]["total_palabras"], 10);
    assert_eq!(
        report["resumen_general"]["frecuencia_por_millon_palabras"],
        100000.0
    );

    corpus.close()?;
    workdir.close()?;
    Ok(())
}

#[test]
fn test_json_round_trip_matches_in_memory_report() -> Result<(), Box<dyn std::error::Error>> {
    let corpus = tempdir()?;
    fs::write(
        corpus.path().join("música.txt"),
        "La música española: música, música y más música",
    )?;
    fs::write(corpus.path().join("vacío.txt"), "nada aquí")?;
    let workdir = tempdir()?;

    buscador_cmd()
        .current_dir(workdir.path())
        .arg(corpus.path().to_str().unwrap())
        .args(["-k", "música"])
        .assert()
        .success();

    let raw = fs::read_to_string(workdir.path().join("resultados_busqueda.json"))?;
    // Non-ASCII must be written literally, not escaped.
    assert!(raw.contains("música"));
    assert!(!raw.contains("\\u00"));

    let report: buscador::AnalysisReport = serde_json::from_str(&raw)?;
    assert_eq!(report.metadata.total_files, 2);
    assert_eq!(report.summary.total_mentions, 4);
    assert_eq!(report.summary.files_with_keyword, 1);
    let with_keyword = report.files.iter().find(|f| f.has_keyword).unwrap();
    assert_eq!(with_keyword.mention_count, 4);
    assert_eq!(with_keyword.contexts.len(), 4);

    corpus.close()?;
    workdir.close()?;
    Ok(())
}

#[test]
fn test_outputs_are_overwritten_on_each_run() -> Result<(), Box<dyn std::error::Error>> {
    let corpus = tempdir()?;
    fs::write(corpus.path().join("a.txt"), "Ejemplo")?;
    let workdir = tempdir()?;
    fs::write(workdir.path().join("resultados_busqueda.json"), "viejo")?;
    fs::write(workdir.path().join("resultados_busqueda.html"), "viejo")?;

    buscador_cmd()
        .current_dir(workdir.path())
        .arg(corpus.path().to_str().unwrap())
        .args(["-k", "Ejemplo"])
        .assert()
        .success();

    let json = fs::read_to_string(workdir.path().join("resultados_busqueda.json"))?;
    let html = fs::read_to_string(workdir.path().join("resultados_busqueda.html"))?;
    assert!(json.starts_with('{'));
    assert!(html.starts_with("<!DOCTYPE html>"));

    corpus.close()?;
    workdir.close()?;
    Ok(())
}

#[test]
fn test_subdirectories_are_scanned_recursively() -> Result<(), Box<dyn std::error::Error>> {
    let corpus = tempdir()?;
    fs::create_dir_all(corpus.path().join("revistas/1920"))?;
    fs::write(corpus.path().join("a.txt"), "sin nada")?;
    fs::write(
        corpus.path().join("revistas/1920/b.txt"),
        "un Ejemplo anidado",
    )?;
    let workdir = tempdir()?;

    buscador_cmd()
        .current_dir(workdir.path())
        .arg(corpus.path().to_str().unwrap())
        .args(["-k", "Ejemplo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encontrados 2 archivos TXT"));

    let report = read_json_report(&workdir);
    assert_eq!(report["resumen_general"]["total_menciones"], 1);

    corpus.close()?;
    workdir.close()?;
    Ok(())
}
