use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{EstadoInventario, EstadoRenta, EstadoVenta, MetodoPago, Rol};
use maskngo_test_utils::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Server timestamps have second precision, allow for that and a slow test run
fn assert_recent(timestamp: NaiveDateTime) {
    let elapsed = Utc::now().naive_utc() - timestamp;

    assert!(
        elapsed.num_seconds().abs() <= 5,
        "timestamp {} is not close to now",
        timestamp
    );
}

/// Expect role `empleado` and a registration date of now
#[tokio::test]
async fn usuario_defaults() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let usuario = entity::usuarios::ActiveModel {
        usuario: ActiveValue::Set("jperez".to_string()),
        nombre: ActiveValue::Set("Juan".to_string()),
        apellido_paterno: ActiveValue::Set("Perez".to_string()),
        password: ActiveValue::Set("$argon2id$placeholder".to_string()),
        ..Default::default()
    }
    .insert(&test.state.db)
    .await?;

    assert_eq!(usuario.rol, Rol::Empleado);
    assert_recent(usuario.fecha_registro);

    Ok(())
}

/// Expect state `Activo` and zero counts
#[tokio::test]
async fn inventario_defaults() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let item = entity::inventario::ActiveModel {
        codigo_barras: ActiveValue::Set("DISNEY0000".to_string()),
        descripcion: ActiveValue::Set("Princesa de hielo".to_string()),
        talla: ActiveValue::Set("M".to_string()),
        precio_venta: ActiveValue::Set(dec!(850.00)),
        precio_renta: ActiveValue::Set(dec!(300.00)),
        ..Default::default()
    }
    .insert(&test.state.db)
    .await?;

    assert_eq!(item.estado, EstadoInventario::Activo);
    assert_eq!(item.stock, 0);
    assert_eq!(item.disponible, 0);
    assert_eq!(item.color, None);

    Ok(())
}

/// Expect state `Activa`, zero penalty and deposit, and a start date of now
#[tokio::test]
async fn renta_defaults() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let cliente = test.shop().insert_mock_cliente("6181234567").await?;
    let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;

    let renta = entity::rentas::ActiveModel {
        id_cliente: ActiveValue::Set(cliente.id_cliente),
        id_usuario: ActiveValue::Set(usuario.id_usuario),
        fecha_devolucion: ActiveValue::Set(Utc::now().naive_utc()),
        dias_renta: ActiveValue::Set(1),
        total: ActiveValue::Set(dec!(300.00)),
        ..Default::default()
    }
    .insert(&test.state.db)
    .await?;

    assert_eq!(renta.estado, EstadoRenta::Activa);
    assert_eq!(renta.penalizacion, Decimal::ZERO);
    assert_eq!(renta.deposito, Decimal::ZERO);
    assert_eq!(renta.fecha_devuelto, None);
    assert_recent(renta.fecha_renta);

    Ok(())
}

/// Expect state `Activa`, cash payment, zero discount and a sale date of now
#[tokio::test]
async fn venta_defaults() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let cliente = test.shop().insert_mock_cliente("6181234567").await?;
    let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;

    let venta = entity::ventas::ActiveModel {
        folio: ActiveValue::Set("VEN-20250121-0001".to_string()),
        id_cliente: ActiveValue::Set(cliente.id_cliente),
        usuario_id: ActiveValue::Set(usuario.id_usuario),
        total: ActiveValue::Set(dec!(850.00)),
        ..Default::default()
    }
    .insert(&test.state.db)
    .await?;

    assert_eq!(venta.estado, EstadoVenta::Activa);
    assert_eq!(venta.metodo_pago, MetodoPago::Efectivo);
    assert_eq!(venta.descuento_porcentaje, Some(Decimal::ZERO));
    assert_eq!(venta.descuento_monto, Some(Decimal::ZERO));
    assert_eq!(venta.cancelada_por, None);
    assert_recent(venta.fecha_venta);

    Ok(())
}

#[tokio::test]
async fn cliente_and_configuracion_timestamps() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let cliente = entity::clientes::ActiveModel {
        nombre: ActiveValue::Set("Maria".to_string()),
        apellido_paterno: ActiveValue::Set("Lopez".to_string()),
        telefono: ActiveValue::Set("6181234567".to_string()),
        ..Default::default()
    }
    .insert(&test.state.db)
    .await?;
    let config = entity::configuracion::ActiveModel {
        nombre_config: ActiveValue::Set("HORARIO".to_string()),
        valor_config: ActiveValue::Set("10:00-20:00".to_string()),
        ..Default::default()
    }
    .insert(&test.state.db)
    .await?;

    assert_recent(cliente.fecha_registro);
    assert_recent(config.fecha_modificacion);
    assert_eq!(config.descripcion, None);

    Ok(())
}
